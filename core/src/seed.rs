// core/src/seed.rs

//! Demo catalog used to populate a fresh store.

use crate::product::NewProduct;

const DEMO_CATALOG: [(&str, &str, &str, f64, f64); 10] = [
  (
    "Wooting 80HE",
    "Клавиатуры",
    "Магнитные свитчи, быстрый отклик, идеальна для FPS и MOBA.",
    24990.0,
    7.0,
  ),
  (
    "Logitech G Pro X Superlight",
    "Мыши",
    "Ультралёгкая беспроводная мышь для киберспорта.",
    10990.0,
    12.0,
  ),
  (
    "SteelSeries QcK Heavy",
    "Коврики",
    "Толстый коврик с контролем и ровным скольжением.",
    2490.0,
    18.0,
  ),
  (
    "HyperX Cloud II",
    "Гарнитуры",
    "Комфортная гарнитура с хорошим микрофоном и звуком.",
    7490.0,
    9.0,
  ),
  (
    "Razer Huntsman Mini",
    "Клавиатуры",
    "Компактная 60% клавиатура, быстрые оптические свитчи.",
    8990.0,
    6.0,
  ),
  (
    "Glorious Model O",
    "Мыши",
    "Лёгкая мышь с сотами, подходит для агрессивного аима.",
    4990.0,
    15.0,
  ),
  (
    "Elgato Stream Deck Mini",
    "Стриминг",
    "Панель кнопок для макросов, стрима и быстрого управления.",
    9990.0,
    5.0,
  ),
  (
    "Xbox Wireless Controller",
    "Геймпады",
    "Универсальный геймпад для ПК и консоли.",
    6490.0,
    10.0,
  ),
  (
    "AverMedia Live Gamer Mini",
    "Стриминг",
    "Карта захвата для записи и стримов в Full HD.",
    8990.0,
    4.0,
  ),
  ("NZXT Capsule", "Микрофоны", "USB-микрофон с чистым звуком.", 6990.0, 8.0),
];

/// The ten demo products, without images.
pub fn demo_products() -> Vec<NewProduct> {
  DEMO_CATALOG
    .iter()
    .map(|&(name, category, description, price, stock)| NewProduct {
      name: name.to_string(),
      category: category.to_string(),
      description: description.to_string(),
      price,
      stock,
      image: String::new(),
    })
    .collect()
}
