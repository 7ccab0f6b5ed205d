//! Typed display strings for pill cards.
//!
//! Only the content that flows through the identification pipeline is
//! localized here: category tags and common usage phrases. Descriptions and
//! warnings stay in English.

pub mod phrases;
pub mod tags;

pub use phrases::*;
pub use tags::*;

use crate::models::{Locale, Pill};

/// Localize a pill's tags and usage lines in place.
pub fn localize_pill(mut pill: Pill, locale: Locale) -> Pill {
    if locale == Locale::En {
        return pill;
    }
    pill.tags = translate_tags(&pill.tags, locale);
    pill.usage = translate_usage(&pill.usage, locale);
    pill
}
