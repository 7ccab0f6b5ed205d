use crate::models::Locale;

/// Common phrases in usage instructions that have a translation.
///
/// Order matters: each phrase is replaced at most once, in declaration
/// order, so longer phrases come before the shorter ones they overlap with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    TakeWithFood,
    TakeWithWater,
    DoNotExceed,
    Wait,
    HoursBetweenDoses,
    PerDay,
    ConsultDoctor,
    DoNotUse,
    MayCause,
    Avoid,
}

impl Phrase {
    pub const ALL: &'static [Phrase] = &[
        Phrase::TakeWithFood,
        Phrase::TakeWithWater,
        Phrase::DoNotExceed,
        Phrase::Wait,
        Phrase::HoursBetweenDoses,
        Phrase::PerDay,
        Phrase::ConsultDoctor,
        Phrase::DoNotUse,
        Phrase::MayCause,
        Phrase::Avoid,
    ];

    pub fn english(&self) -> &'static str {
        self.label(Locale::En)
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        use Locale::*;
        use Phrase::*;
        match (*self, locale) {
            (TakeWithFood, En) => "Take with food",
            (TakeWithFood, Ru) => "Принимать во время еды",
            (TakeWithFood, Uz) => "Ovqat bilan qabul qiling",
            (TakeWithWater, En) => "Take with water",
            (TakeWithWater, Ru) => "Запивать водой",
            (TakeWithWater, Uz) => "Suv bilan iching",
            (DoNotExceed, En) => "Do not exceed",
            (DoNotExceed, Ru) => "Не превышать",
            (DoNotExceed, Uz) => "Oshirmang",
            (Wait, En) => "Wait",
            (Wait, Ru) => "Подождите",
            (Wait, Uz) => "Kuting",
            (HoursBetweenDoses, En) => "hours between doses",
            (HoursBetweenDoses, Ru) => "часов между приёмами",
            (HoursBetweenDoses, Uz) => "soat dozalar orasida",
            (PerDay, En) => "per day",
            (PerDay, Ru) => "в сутки",
            (PerDay, Uz) => "kuniga",
            (ConsultDoctor, En) => "Consult a doctor",
            (ConsultDoctor, Ru) => "Проконсультируйтесь с врачом",
            (ConsultDoctor, Uz) => "Shifokor bilan maslahatlashing",
            (DoNotUse, En) => "Do not use",
            (DoNotUse, Ru) => "Не используйте",
            (DoNotUse, Uz) => "Foydalanmang",
            (MayCause, En) => "May cause",
            (MayCause, Ru) => "Может вызвать",
            (MayCause, Uz) => "Sabab bo'lishi mumkin",
            (Avoid, En) => "Avoid",
            (Avoid, Ru) => "Избегайте",
            (Avoid, Uz) => "Saqlaning",
        }
    }
}

/// Replace the first occurrence of each known English phrase in a usage line.
pub fn translate_usage_line(line: &str, locale: Locale) -> String {
    if locale == Locale::En || line.is_empty() {
        return line.to_string();
    }
    Phrase::ALL.iter().fold(line.to_string(), |text, phrase| {
        text.replacen(phrase.english(), phrase.label(locale), 1)
    })
}

pub fn translate_usage(lines: &[String], locale: Locale) -> Vec<String> {
    lines
        .iter()
        .map(|line| translate_usage_line(line, locale))
        .collect()
}
