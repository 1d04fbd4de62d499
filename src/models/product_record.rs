use serde::Deserialize;

use crate::utils::deserialize_display_text;

/// One table column: the record key it reads and its header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductColumn {
    pub key: &'static str,
    pub label: &'static str,
}

/// Fixed column order of the product table.
pub const PRODUCT_COLUMNS: [ProductColumn; 18] = [
    ProductColumn { key: "product_name", label: "Product" },
    ProductColumn { key: "brands", label: "Brand" },
    ProductColumn { key: "ingredients_text", label: "Ingredients" },
    ProductColumn { key: "quantity", label: "Quantity" },
    ProductColumn { key: "code", label: "Code" },
    ProductColumn { key: "energy-kcal_100g", label: "Energy (kcal)" },
    ProductColumn { key: "fat_100g", label: "Fat" },
    ProductColumn { key: "carbohydrates_100g", label: "Carbohydrates" },
    ProductColumn { key: "sugars_100g", label: "Sugars" },
    ProductColumn { key: "proteins_100g", label: "Protein" },
    ProductColumn { key: "salt_100g", label: "Salt" },
    ProductColumn { key: "fiber_100g", label: "Fiber" },
    ProductColumn { key: "vitamin-a_100g", label: "Vitamin A" },
    ProductColumn { key: "vitamin-c_100g", label: "Vitamin C" },
    ProductColumn { key: "calcium_100g", label: "Calcium" },
    ProductColumn { key: "iron_100g", label: "Iron" },
    ProductColumn { key: "magnesium_100g", label: "Magnesium" },
    ProductColumn { key: "potassium_100g", label: "Potassium" },
];

/// A product row as delivered by the backend. Every value is kept as its
/// display text; missing keys stay `None` and render as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub brands: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub ingredients_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub code: Option<String>,
    #[serde(rename = "energy-kcal_100g", default, deserialize_with = "deserialize_display_text")]
    pub energy_kcal: Option<String>,
    #[serde(rename = "fat_100g", default, deserialize_with = "deserialize_display_text")]
    pub fat: Option<String>,
    #[serde(rename = "carbohydrates_100g", default, deserialize_with = "deserialize_display_text")]
    pub carbohydrates: Option<String>,
    #[serde(rename = "sugars_100g", default, deserialize_with = "deserialize_display_text")]
    pub sugars: Option<String>,
    #[serde(rename = "proteins_100g", default, deserialize_with = "deserialize_display_text")]
    pub proteins: Option<String>,
    #[serde(rename = "salt_100g", default, deserialize_with = "deserialize_display_text")]
    pub salt: Option<String>,
    #[serde(rename = "fiber_100g", default, deserialize_with = "deserialize_display_text")]
    pub fiber: Option<String>,
    #[serde(rename = "vitamin-a_100g", default, deserialize_with = "deserialize_display_text")]
    pub vitamin_a: Option<String>,
    #[serde(rename = "vitamin-c_100g", default, deserialize_with = "deserialize_display_text")]
    pub vitamin_c: Option<String>,
    #[serde(rename = "calcium_100g", default, deserialize_with = "deserialize_display_text")]
    pub calcium: Option<String>,
    #[serde(rename = "iron_100g", default, deserialize_with = "deserialize_display_text")]
    pub iron: Option<String>,
    #[serde(rename = "magnesium_100g", default, deserialize_with = "deserialize_display_text")]
    pub magnesium: Option<String>,
    #[serde(rename = "potassium_100g", default, deserialize_with = "deserialize_display_text")]
    pub potassium: Option<String>,
}

impl ProductRecord {
    /// Cell texts in [`PRODUCT_COLUMNS`] order.
    pub fn cells(&self) -> Vec<String> {
        [
            &self.product_name,
            &self.brands,
            &self.ingredients_text,
            &self.quantity,
            &self.code,
            &self.energy_kcal,
            &self.fat,
            &self.carbohydrates,
            &self.sugars,
            &self.proteins,
            &self.salt,
            &self.fiber,
            &self.vitamin_a,
            &self.vitamin_c,
            &self.calcium,
            &self.iron,
            &self.magnesium,
            &self.potassium,
        ]
        .into_iter()
        .map(|field| field.clone().unwrap_or_default())
        .collect()
    }
}
