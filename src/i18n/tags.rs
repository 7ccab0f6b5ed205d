//! Category tags shown on a pill card.
//!
//! Catalog records carry `Tag` values directly, so a misspelt tag is a
//! compile error rather than an untranslated chip. Free-text tags returned by
//! the vision service go through [`translate_tags`], which falls back to the
//! original text when the phrase is not a known tag.

use crate::models::Locale;

macro_rules! tag_table {
    ($($variant:ident => $en:literal, $ru:literal, $uz:literal;)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Tag {
            $($variant),+
        }

        impl Tag {
            pub const ALL: &'static [Tag] = &[$(Tag::$variant),+];

            /// The English phrase, which is also the wire form used by the
            /// vision service and stored in history.
            pub fn english(&self) -> &'static str {
                match self {
                    $(Tag::$variant => $en),+
                }
            }

            pub fn label(&self, locale: Locale) -> &'static str {
                match (*self, locale) {
                    $(
                        (Tag::$variant, Locale::En) => $en,
                        (Tag::$variant, Locale::Ru) => $ru,
                        (Tag::$variant, Locale::Uz) => $uz,
                    )+
                }
            }

            pub fn from_english(phrase: &str) -> Option<Tag> {
                match phrase {
                    $($en => Some(Tag::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

tag_table! {
    PainRelief => "Pain relief", "Обезболивающее", "Og'riq qoldiruvchi";
    AntiInflammatory => "Anti-inflammatory", "Противовоспалительное", "Yallig'lanishga qarshi";
    FeverReducer => "Fever reducer", "Жаропонижающее", "Isitma tushiruvchi";
    Headache => "Headache", "Головная боль", "Bosh og'rig'i";
    Strong => "Strong", "Сильное", "Kuchli";
    ExtraStrength => "Extra strength", "Усиленное", "Kuchaytirilgan";
    BloodThinner => "Blood thinner", "Разжижает кровь", "Qonni suyultiruvchi";
    HeartProtection => "Heart protection", "Защита сердца", "Yurak himoyasi";
    Cardiovascular => "Cardiovascular", "Сердечно-сосудистое", "Yurak-qon tomir";
    Arthritis => "Arthritis", "Артрит", "Artrit";
    MusclePain => "Muscle pain", "Мышечная боль", "Mushak og'rig'i";
    Antibiotic => "Antibiotic", "Антибиотик", "Antibiotik";
    InfectionTreatment => "Infection treatment", "Лечение инфекций", "Infeksiyani davolash";
    Bacterial => "Bacterial", "Бактериальные", "Bakterial";
    BroadSpectrum => "Broad spectrum", "Широкого спектра", "Keng spektrli";
    Respiratory => "Respiratory", "Дыхательные пути", "Nafas yo'llari";
    UtiTreatment => "UTI treatment", "Лечение ИМП", "Siydik yo'llari infeksiyasi";
    AcneTreatment => "Acne treatment", "Лечение акне", "Akneni davolash";
    LymeDisease => "Lyme disease", "Болезнь Лайма", "Layme kasalligi";
    Diabetes => "Diabetes", "Диабет", "Diabet";
    BloodSugarControl => "Blood sugar control", "Контроль сахара", "Qon shakarini nazorat qilish";
    Type2 => "Type 2", "2 типа", "2-tur";
    InsulinStimulator => "Insulin stimulator", "Стимулятор инсулина", "Insulin stimulyatori";
    BloodPressure => "Blood pressure", "Давление", "Qon bosimi";
    Hypertension => "Hypertension", "Гипертония", "Gipertoniya";
    Heart => "Heart", "Сердце", "Yurak";
    AceInhibitor => "ACE inhibitor", "Ингибитор АПФ", "AAF ingibitori";
    HeartFailure => "Heart failure", "Сердечная недостаточность", "Yurak yetishmovchiligi";
    BetaBlocker => "Beta-blocker", "Бета-блокатор", "Beta-bloker";
    HeartRhythm => "Heart rhythm", "Сердечный ритм", "Yurak ritmi";
    Cholesterol => "Cholesterol", "Холестерин", "Xolesterin";
    Statin => "Statin", "Статин", "Statin";
    AcidReflux => "Acid reflux", "Кислотный рефлюкс", "Kislota reflyuksi";
    Gerd => "GERD", "ГЭРБ", "GERK";
    Stomach => "Stomach", "Желудок", "Oshqozon";
    AcidReducer => "Acid reducer", "Снижает кислотность", "Kislotalikni kamaytiruvchi";
    Nausea => "Nausea", "Тошнота", "Ko'ngil aynishi";
    Vomiting => "Vomiting", "Рвота", "Qusish";
    Digestive => "Digestive", "Пищеварение", "Hazm qilish";
    Allergy => "Allergy", "Аллергия", "Allergiya";
    Antihistamine => "Antihistamine", "Антигистаминное", "Antigistamin";
    HayFever => "Hay fever", "Сенная лихорадка", "Pichan isitmasi";
    NonDrowsy => "Non-drowsy", "Без сонливости", "Uyqu keltirmaydi";
    LongActing => "Long-acting", "Длительного действия", "Uzoq ta'sirli";
    Antidepressant => "Antidepressant", "Антидепрессант", "Antidepressant";
    Ssri => "SSRI", "СИОЗС", "SSQI";
    Anxiety => "Anxiety", "Тревожность", "Xavotir";
    Ocd => "OCD", "ОКР", "OKB";
    Vitamin => "Vitamin", "Витамин", "Vitamin";
    BoneHealth => "Bone health", "Здоровье костей", "Suyak salomatligi";
    ImmuneSystem => "Immune system", "Иммунитет", "Immunitet";
    Calcium => "Calcium", "Кальций", "Kalsiy";
    Supplement => "Supplement", "Добавка", "Qo'shimcha";
    GeneralHealth => "General health", "Общее здоровье", "Umumiy salomatlik";
    Antifungal => "Antifungal", "Противогрибковое", "Zamburug'ga qarshi";
    YeastInfection => "Yeast infection", "Кандидоз", "Kandidoz";
    Fungal => "Fungal", "Грибковые", "Zamburug'li";
    Topical => "Topical", "Наружное", "Tashqi";
    Skin => "Skin", "Кожа", "Teri";
    Antiviral => "Antiviral", "Противовирусное", "Virusga qarshi";
    Herpes => "Herpes", "Герпес", "Gerpes";
    Shingles => "Shingles", "Опоясывающий лишай", "O'rab oluvchi temiratki";
    Asthma => "Asthma", "Астма", "Astma";
    Bronchodilator => "Bronchodilator", "Бронхолитик", "Bronxolitik";
    RescueInhaler => "Rescue inhaler", "Экстренный ингалятор", "Shoshilinch ingalyator";
    Corticosteroid => "Corticosteroid", "Кортикостероид", "Kortikosteroid";
    Prevention => "Prevention", "Профилактика", "Profilaktika";
    Chemotherapy => "Chemotherapy", "Химиотерапия", "Kimyoterapiya";
    SleepAid => "Sleep aid", "Снотворное", "Uyqu uchun";
    Melatonin => "Melatonin", "Мелатонин", "Melatonin";
    Insomnia => "Insomnia", "Бессонница", "Uyqusizlik";
    NervePain => "Nerve pain", "Нервная боль", "Asab og'rig'i";
    Seizures => "Seizures", "Судороги", "Tutqanoqlar";
    Neuropathic => "Neuropathic", "Нейропатическое", "Neyropatik";
    Migraine => "Migraine", "Мигрень", "Migren";
    Triptan => "Triptan", "Триптан", "Triptan";
    Osteoporosis => "Osteoporosis", "Остеопороз", "Osteoporoz";
    Bisphosphonate => "Bisphosphonate", "Бисфосфонат", "Bisfosfonat";
    Thyroid => "Thyroid", "Щитовидная железа", "Qalqonsimon bez";
    HormoneReplacement => "Hormone replacement", "Заместительная гормонотерапия", "Gormon o'rnini bosuvchi";
    Hypothyroidism => "Hypothyroidism", "Гипотиреоз", "Gipotireoz";
    BirthControl => "Birth control", "Контрацепция", "Homiladorlikdan saqlanish";
    Contraceptive => "Contraceptive", "Контрацептив", "Kontraseptiv";
    Hormonal => "Hormonal", "Гормональное", "Gormonal";
    Diarrhea => "Diarrhea", "Диарея", "Diareya";
    AntiDiarrheal => "Anti-diarrheal", "Противодиарейное", "Ich ketishiga qarshi";
    Constipation => "Constipation", "Запор", "Ich qotishi";
    Laxative => "Laxative", "Слабительное", "Surgi";
    Anthelmintic => "Anthelmintic", "Противоглистное", "Gijjaga qarshi";
    Worms => "Worms", "Глисты", "Gijjalar";
    Parasite => "Parasite", "Паразиты", "Parazitlar";
    Error => "Error", "Ошибка", "Xato";
}

/// Render typed catalog tags in the given locale.
pub fn render_tags(tags: &[Tag], locale: Locale) -> Vec<String> {
    tags.iter().map(|t| t.label(locale).to_string()).collect()
}

/// Translate free-text tags. Phrases that are not a known [`Tag`] are kept
/// verbatim.
pub fn translate_tags(tags: &[String], locale: Locale) -> Vec<String> {
    tags.iter()
        .map(|raw| match Tag::from_english(raw) {
            Some(tag) => tag.label(locale).to_string(),
            None => {
                tracing::debug!(tag = %raw, "No translation for tag, keeping original");
                raw.clone()
            }
        })
        .collect()
}
