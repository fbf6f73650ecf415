// src/booth.rs

use crate::parse::Record;
use crate::style::{Area, ProductType};

/// Column names in the booth sheet.
pub mod fields {
    pub const NAME: &str = "攤位名稱";
    pub const AREA: &str = "區域";
    pub const PRODUCT_TYPE: &str = "商品類型";
    pub const TIME: &str = "時間";
    pub const IMAGE: &str = "攤位圖片";
    pub const LINK: &str = "攤位介紹連結";
    pub const NUMBER: &str = "攤位編號";
    pub const OWNER: &str = "攤主帳號";
}

/// Image shown when a booth has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Typed read-only view of a booth [`Record`]. Missing columns read as `""`.
#[derive(Debug, Clone, Copy)]
pub struct Booth<'a> {
    record: &'a Record,
}

impl<'a> Booth<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    fn field(&self, key: &str) -> &'a str {
        self.record.get(key).unwrap_or_default()
    }

    pub fn name(&self) -> &'a str {
        self.field(fields::NAME)
    }

    pub fn area(&self) -> &'a str {
        self.field(fields::AREA)
    }

    pub fn product_type(&self) -> &'a str {
        self.field(fields::PRODUCT_TYPE)
    }

    pub fn time(&self) -> &'a str {
        self.field(fields::TIME)
    }

    pub fn link(&self) -> &'a str {
        self.field(fields::LINK)
    }

    pub fn number(&self) -> &'a str {
        self.field(fields::NUMBER)
    }

    pub fn owner(&self) -> &'a str {
        self.field(fields::OWNER)
    }

    /// Image path, falling back to [`PLACEHOLDER_IMAGE`] when absent or empty.
    pub fn image(&self) -> &'a str {
        match self.record.get(fields::IMAGE) {
            Some(src) if !src.is_empty() => src,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    pub fn area_kind(&self) -> Area {
        Area::from_label(self.area())
    }

    pub fn product_kind(&self) -> ProductType {
        ProductType::from_label(self.product_type())
    }
}
