use serde::Deserialize;

pub const PRODUCTS: &[&str] = &["Cimento", "Areia", "Bloco de Concreto", "Tijolo", "Reboco"];
pub const REGIONS: &[&str] = &["Norte", "Nordeste", "Centro-Oeste", "Sudeste", "Sul"];
pub const SALE_CHANNELS: &[&str] = &["online", "presencial", "telefonica"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalField {
    Region,
    SaleChannel,
}

/// Shape of the sales records the generator asks for. Only the prompt uses
/// it; generated text is never checked against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSchema {
    pub record_count: usize,
    pub optional_fields: Vec<OptionalField>,
}

impl Default for DatasetSchema {
    fn default() -> Self {
        Self {
            record_count: 20,
            optional_fields: vec![OptionalField::Region, OptionalField::SaleChannel],
        }
    }
}

impl DatasetSchema {
    pub fn includes(&self, field: OptionalField) -> bool {
        self.optional_fields.contains(&field)
    }
}
