// src/style.rs

/// Badge class for anything the tables below don't know.
pub const DEFAULT_BADGE: &str = "bg-gray-100 text-gray-800";
/// The time badge is always blue.
pub const TIME_BADGE: &str = "bg-blue-100 text-blue-800";

/// Market area a booth sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    A,
    B,
    C,
    D,
    Other,
}

impl Area {
    pub fn from_label(label: &str) -> Self {
        match label {
            "A區" => Area::A,
            "B區" => Area::B,
            "C區" => Area::C,
            "D區" => Area::D,
            _ => Area::Other,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Area::A => "bg-red-100 text-red-800",
            Area::B => "bg-blue-100 text-blue-800",
            Area::C => "bg-green-100 text-green-800",
            Area::D => "bg-yellow-100 text-yellow-800",
            Area::Other => DEFAULT_BADGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    /// 二手商品
    SecondHand,
    /// 自創商品
    Handmade,
    Other,
}

impl ProductType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "二手商品" => ProductType::SecondHand,
            "自創商品" => ProductType::Handmade,
            _ => ProductType::Other,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ProductType::SecondHand => "bg-orange-100 text-orange-800",
            ProductType::Handmade => "bg-purple-100 text-purple-800",
            ProductType::Other => DEFAULT_BADGE,
        }
    }
}

/// Tailwind classes for an area label, e.g. `"A區"`.
pub fn area_color(area: &str) -> &'static str {
    Area::from_label(area).badge_class()
}

/// Tailwind classes for a product-type label, e.g. `"二手商品"`.
pub fn product_type_color(product_type: &str) -> &'static str {
    ProductType::from_label(product_type).badge_class()
}
