// src/render/mod.rs

use crate::booth::Booth;
use crate::parse::Record;
use crate::style::TIME_BADGE;

pub mod utils;

use utils::html_escape;

const BADGE: &str = "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium";

/// One booth card. Every record field is escaped before interpolation.
pub fn render_card(booth: &Booth<'_>) -> String {
    format!(
        r#"
          <div class="overflow-hidden rounded-lg shadow-md hover:shadow-xl transition-shadow duration-300 bg-white">
            <div class="relative">
              <img
                src="{image}"
                alt="{name}"
                width="300"
                height="200"
                class="w-full h-48 object-cover"
              />
              <div class="absolute top-2 left-2 flex flex-wrap gap-1">
                <span class="{badge} {area_class}">{area}</span>
                <span class="{badge} {product_class}">{product_type}</span>
                <span class="{badge} {time_class}">{time}</span>
              </div>
            </div>
            <div class="p-4">
              <h3 class="font-bold text-lg mb-2 text-gray-800">{name}</h3>
              <p class="text-gray-600 mb-3">{owner}</p>
              <div class="flex items-center justify-between">
                <a
                  href="{link}"
                  target="_blank"
                  rel="noopener noreferrer"
                  class="inline-flex items-center justify-center px-3 py-1.5 border border-transparent text-sm font-medium rounded-md text-white bg-blue-500 hover:bg-blue-600 transition-colors"
                >
                  查看攤位介紹
                </a>
                <div class="text-lg font-bold text-orange-600">{number}</div>
              </div>
            </div>
          </div>
        "#,
        image = html_escape(booth.image()),
        name = html_escape(booth.name()),
        badge = BADGE,
        area_class = booth.area_kind().badge_class(),
        area = html_escape(booth.area()),
        product_class = booth.product_kind().badge_class(),
        product_type = html_escape(booth.product_type()),
        time_class = TIME_BADGE,
        time = html_escape(booth.time()),
        owner = html_escape(booth.owner()),
        link = html_escape(booth.link()),
        number = html_escape(booth.number()),
    )
}

/// All cards, concatenated in input order.
pub fn render_cards(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| render_card(&Booth::new(r)))
        .collect()
}
