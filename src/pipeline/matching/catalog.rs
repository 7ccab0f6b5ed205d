//! Built-in medication catalog used by the offline matcher.
//!
//! Records are `'static` and never mutated. A record's identity is its
//! position in [`CATALOG`].

use crate::i18n::Tag;
use crate::models::{ColorLabel, PillColor, PillShape};

use crate::models::PillColor::{Blue, Gray, Green, Orange, Pink, Purple, Red, White, Yellow};

#[derive(Debug, Clone, PartialEq)]
pub struct MedicationRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static [&'static str],
    pub tags: &'static [Tag],
    pub color: Option<ColorLabel>,
    pub shape: Option<PillShape>,
    pub dosage: Option<&'static str>,
    pub important: Option<&'static str>,
}

impl MedicationRecord {
    pub fn matches_color(&self, color: &ColorLabel) -> bool {
        self.color.is_some_and(|c| c.overlaps(color))
    }

    pub fn matches_shape(&self, shape: PillShape) -> bool {
        self.shape == Some(shape)
    }
}

const fn solid(color: PillColor) -> Option<ColorLabel> {
    Some(ColorLabel::solid(color))
}

const fn two_tone(primary: PillColor, secondary: PillColor) -> Option<ColorLabel> {
    Some(ColorLabel::two_tone(primary, secondary))
}

pub static CATALOG: &[MedicationRecord] = &[
    MedicationRecord {
        name: "Ibuprofen 200mg",
        description: "Nonsteroidal anti-inflammatory drug (NSAID) used to reduce inflammation and relieve pain.",
        usage: &[
            "Take with food or milk to reduce stomach upset",
            "Do not exceed 1200mg per day unless directed by a doctor",
            "May take 4-6 hours between doses",
        ],
        tags: &[Tag::PainRelief, Tag::AntiInflammatory, Tag::FeverReducer],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("200mg"),
        important: Some("Do not use if you have stomach ulcers or are allergic to NSAIDs. Consult a doctor if pain persists for more than 10 days."),
    },
    MedicationRecord {
        name: "Amoxicillin 500mg",
        description: "Antibiotic used to treat bacterial infections such as respiratory infections, ear infections, and urinary tract infections.",
        usage: &[
            "Take exactly as prescribed by your doctor",
            "Complete the full course even if you feel better",
            "Take with or without food, but take consistently",
        ],
        tags: &[Tag::Antibiotic, Tag::InfectionTreatment],
        color: two_tone(White, Blue),
        shape: Some(PillShape::Capsule),
        dosage: Some("500mg"),
        important: Some("Finish all medication as prescribed. Do not share antibiotics with others. May cause allergic reactions in some people."),
    },
    MedicationRecord {
        name: "Paracetamol 500mg",
        description: "Pain reliever and fever reducer. Commonly used for headaches, muscle aches, and reducing fever.",
        usage: &["Take with water", "Do not exceed 4000mg per day", "Wait 4-6 hours between doses"],
        tags: &[Tag::PainRelief, Tag::FeverReducer],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("500mg"),
        important: Some("Do not take with other products containing paracetamol. Overdose can cause serious liver damage."),
    },
    MedicationRecord {
        name: "Aspirin 100mg",
        description: "Used for pain relief, reducing inflammation, and as a blood thinner to prevent heart attacks and strokes.",
        usage: &[
            "Take with food to reduce stomach irritation",
            "Do not crush or chew enteric-coated tablets",
            "Follow doctor's instructions for heart protection",
        ],
        tags: &[Tag::PainRelief, Tag::BloodThinner, Tag::HeartProtection],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("100mg"),
        important: Some("Do not give to children or teenagers with viral infections. May increase bleeding risk. Consult doctor before use."),
    },
    MedicationRecord {
        name: "Metformin 500mg",
        description: "Oral medication used to treat type 2 diabetes by helping control blood sugar levels.",
        usage: &[
            "Take with meals to reduce stomach upset",
            "Start with lower dose and gradually increase",
            "Monitor blood sugar levels regularly",
        ],
        tags: &[Tag::Diabetes, Tag::BloodSugarControl],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("500mg"),
        important: Some("May cause lactic acidosis in rare cases. Avoid excessive alcohol. Regular blood tests may be required."),
    },
    MedicationRecord {
        name: "Naproxen 250mg",
        description: "Long-acting NSAID for arthritis, muscle pain, and menstrual cramps.",
        usage: &["Take with food or milk", "Do not exceed 1000mg per day", "Wait 8-12 hours between doses"],
        tags: &[Tag::PainRelief, Tag::AntiInflammatory, Tag::Arthritis, Tag::LongActing],
        color: solid(Blue),
        shape: Some(PillShape::Oval),
        dosage: Some("250mg"),
        important: Some("May increase the risk of heart attack, stroke, and stomach bleeding. Avoid alcohol."),
    },
    MedicationRecord {
        name: "Diclofenac 50mg",
        description: "NSAID used for joint pain, muscle pain, and inflammation.",
        usage: &["Take with food", "Swallow whole, do not crush", "Do not exceed 150mg per day"],
        tags: &[Tag::AntiInflammatory, Tag::MusclePain, Tag::Arthritis],
        color: solid(Yellow),
        shape: Some(PillShape::Round),
        dosage: Some("50mg"),
        important: Some("Do not use after heart surgery. May cause stomach ulcers with long-term use."),
    },
    MedicationRecord {
        name: "Azithromycin 250mg",
        description: "Macrolide antibiotic for respiratory, skin, and ear infections.",
        usage: &["Take once daily", "Take with or without food", "Complete the full course"],
        tags: &[Tag::Antibiotic, Tag::Respiratory, Tag::Bacterial],
        color: solid(Pink),
        shape: Some(PillShape::Oval),
        dosage: Some("250mg"),
        important: Some("May cause heart rhythm changes in susceptible people. Consult a doctor if diarrhea persists."),
    },
    MedicationRecord {
        name: "Ciprofloxacin 500mg",
        description: "Broad spectrum antibiotic used for urinary tract and other bacterial infections.",
        usage: &["Take with water", "Do not take with dairy products alone", "Wait 12 hours between doses"],
        tags: &[Tag::Antibiotic, Tag::BroadSpectrum, Tag::UtiTreatment],
        color: solid(White),
        shape: Some(PillShape::Oval),
        dosage: Some("500mg"),
        important: Some("May cause tendon damage. Avoid strong sunlight during treatment."),
    },
    MedicationRecord {
        name: "Doxycycline 100mg",
        description: "Tetracycline antibiotic used for acne, respiratory infections, and Lyme disease.",
        usage: &["Take with a full glass of water", "Stay upright for 30 minutes after taking", "Avoid taking with milk or antacids"],
        tags: &[Tag::Antibiotic, Tag::AcneTreatment, Tag::LymeDisease],
        color: two_tone(Yellow, Blue),
        shape: Some(PillShape::Capsule),
        dosage: Some("100mg"),
        important: Some("Do not use during pregnancy or in children under 8. May cause sun sensitivity."),
    },
    MedicationRecord {
        name: "Glimepiride 2mg",
        description: "Sulfonylurea that lowers blood sugar in type 2 diabetes by stimulating insulin release.",
        usage: &["Take with breakfast", "Do not skip meals", "Monitor blood sugar levels regularly"],
        tags: &[Tag::Diabetes, Tag::Type2, Tag::InsulinStimulator],
        color: solid(Green),
        shape: Some(PillShape::Oval),
        dosage: Some("2mg"),
        important: Some("May cause low blood sugar. Carry a source of sugar with you."),
    },
    MedicationRecord {
        name: "Lisinopril 10mg",
        description: "ACE inhibitor used to treat high blood pressure and heart failure.",
        usage: &["Take once daily at the same time", "Take with or without food", "Rise slowly from sitting"],
        tags: &[Tag::BloodPressure, Tag::AceInhibitor, Tag::HeartFailure],
        color: solid(Pink),
        shape: Some(PillShape::Round),
        dosage: Some("10mg"),
        important: Some("Do not use during pregnancy. May cause a persistent dry cough."),
    },
    MedicationRecord {
        name: "Amlodipine 5mg",
        description: "Calcium channel blocker for high blood pressure and chest pain.",
        usage: &["Take once daily", "Take with or without food", "Do not stop suddenly"],
        tags: &[Tag::BloodPressure, Tag::Hypertension, Tag::Heart],
        color: solid(White),
        shape: Some(PillShape::Square),
        dosage: Some("5mg"),
        important: Some("May cause ankle swelling. Avoid grapefruit juice."),
    },
    MedicationRecord {
        name: "Metoprolol 50mg",
        description: "Beta-blocker used for high blood pressure, chest pain, and irregular heart rhythm.",
        usage: &["Take with food", "Take at the same times each day", "Do not stop suddenly"],
        tags: &[Tag::BetaBlocker, Tag::BloodPressure, Tag::HeartRhythm],
        color: solid(Pink),
        shape: Some(PillShape::Capsule),
        dosage: Some("50mg"),
        important: Some("Stopping abruptly can worsen chest pain. May cause tiredness and dizziness."),
    },
    MedicationRecord {
        name: "Atorvastatin 20mg",
        description: "Statin that lowers LDL cholesterol and reduces cardiovascular risk.",
        usage: &["Take once daily", "Take at the same time each day", "Avoid large amounts of grapefruit juice"],
        tags: &[Tag::Cholesterol, Tag::Statin, Tag::Cardiovascular],
        color: solid(White),
        shape: Some(PillShape::Oval),
        dosage: Some("20mg"),
        important: Some("Report unexplained muscle pain or weakness. Avoid excessive alcohol."),
    },
    MedicationRecord {
        name: "Omeprazole 20mg",
        description: "Proton pump inhibitor that reduces stomach acid for reflux and ulcers.",
        usage: &["Take before a meal", "Swallow whole, do not chew", "Take once daily in the morning"],
        tags: &[Tag::AcidReflux, Tag::Gerd, Tag::Stomach],
        color: two_tone(Purple, Pink),
        shape: Some(PillShape::Capsule),
        dosage: Some("20mg"),
        important: Some("Long-term use may lower magnesium and vitamin B12. Consult a doctor if symptoms persist."),
    },
    MedicationRecord {
        name: "Famotidine 20mg",
        description: "H2 blocker that reduces stomach acid for heartburn and indigestion.",
        usage: &["Take with water", "Take before meals that cause heartburn", "Do not exceed 40mg per day"],
        tags: &[Tag::AcidReducer, Tag::Stomach, Tag::Digestive],
        color: solid(Orange),
        shape: Some(PillShape::Round),
        dosage: Some("20mg"),
        important: Some("Consult a doctor if heartburn lasts longer than 14 days."),
    },
    MedicationRecord {
        name: "Ondansetron 4mg",
        description: "Antiemetic used to prevent nausea and vomiting.",
        usage: &["Take with or without food", "Let orally disintegrating tablets dissolve on the tongue", "Do not exceed 24mg per day"],
        tags: &[Tag::Nausea, Tag::Vomiting, Tag::Prevention],
        color: solid(Yellow),
        shape: Some(PillShape::Oval),
        dosage: Some("4mg"),
        important: Some("May cause headache and constipation. Consult a doctor if you have heart rhythm problems."),
    },
    MedicationRecord {
        name: "Cetirizine 10mg",
        description: "Antihistamine for hay fever, hives, and other allergy symptoms.",
        usage: &["Take once daily", "Take with water", "Do not exceed 10mg per day"],
        tags: &[Tag::Allergy, Tag::Antihistamine, Tag::HayFever],
        color: solid(White),
        shape: Some(PillShape::Oval),
        dosage: Some("10mg"),
        important: Some("May cause drowsiness. Avoid alcohol."),
    },
    MedicationRecord {
        name: "Loratadine 10mg",
        description: "Non-drowsy antihistamine for seasonal allergy relief.",
        usage: &["Take once daily", "Take with or without food", "Do not exceed 10mg per day"],
        tags: &[Tag::Allergy, Tag::NonDrowsy, Tag::LongActing],
        color: solid(White),
        shape: Some(PillShape::Square),
        dosage: Some("10mg"),
        important: Some("Consult a doctor before use if you have liver or kidney disease."),
    },
    MedicationRecord {
        name: "Sertraline 50mg",
        description: "SSRI antidepressant used for depression, anxiety, and OCD.",
        usage: &["Take once daily", "Take at the same time each day", "Do not stop suddenly"],
        tags: &[Tag::Antidepressant, Tag::Ssri, Tag::Anxiety, Tag::Ocd],
        color: solid(Blue),
        shape: Some(PillShape::Capsule),
        dosage: Some("50mg"),
        important: Some("May take several weeks to work. Consult a doctor about any mood changes."),
    },
    MedicationRecord {
        name: "Vitamin D3 1000 IU",
        description: "Supplement that supports bone health and the immune system.",
        usage: &["Take with food", "Take once daily", "Do not exceed the recommended dose"],
        tags: &[Tag::Vitamin, Tag::BoneHealth, Tag::ImmuneSystem],
        color: solid(Yellow),
        shape: Some(PillShape::Oval),
        dosage: Some("1000 IU"),
        important: Some("High doses over long periods can raise calcium levels."),
    },
    MedicationRecord {
        name: "Fluconazole 150mg",
        description: "Antifungal used to treat yeast infections and other fungal infections.",
        usage: &["Take as a single dose", "Take with or without food", "Consult a doctor if symptoms return"],
        tags: &[Tag::Antifungal, Tag::YeastInfection, Tag::Fungal],
        color: solid(Pink),
        shape: Some(PillShape::Oval),
        dosage: Some("150mg"),
        important: Some("May interact with many medications. Consult a doctor if you take other drugs."),
    },
    MedicationRecord {
        name: "Acyclovir 400mg",
        description: "Antiviral used for herpes, shingles, and chickenpox.",
        usage: &["Take with water", "Start as soon as symptoms appear", "Wait 4 hours between doses"],
        tags: &[Tag::Antiviral, Tag::Herpes, Tag::Shingles],
        color: solid(Blue),
        shape: Some(PillShape::Round),
        dosage: Some("400mg"),
        important: Some("Drink plenty of fluids. Consult a doctor if you have kidney disease."),
    },
    MedicationRecord {
        name: "Montelukast 10mg",
        description: "Leukotriene blocker that prevents asthma attacks and relieves allergy symptoms.",
        usage: &["Take once daily in the evening", "Take with or without food", "Do not use for sudden attacks"],
        tags: &[Tag::Asthma, Tag::Allergy, Tag::Prevention],
        color: solid(Yellow),
        shape: Some(PillShape::Square),
        dosage: Some("10mg"),
        important: Some("May cause mood or behavior changes. Keep a rescue inhaler available."),
    },
    MedicationRecord {
        name: "Melatonin 3mg",
        description: "Sleep aid that helps regulate the sleep-wake cycle.",
        usage: &["Take 30 minutes before bedtime", "Do not exceed 10mg per day", "Avoid driving after taking"],
        tags: &[Tag::SleepAid, Tag::Melatonin, Tag::Insomnia],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("3mg"),
        important: Some("May cause morning drowsiness. Consult a doctor for long-term use."),
    },
    MedicationRecord {
        name: "Gabapentin 300mg",
        description: "Anticonvulsant used for nerve pain and seizures.",
        usage: &["Take with or without food", "Wait 8 hours between doses", "Do not stop suddenly"],
        tags: &[Tag::NervePain, Tag::Seizures, Tag::Neuropathic],
        color: solid(Yellow),
        shape: Some(PillShape::Capsule),
        dosage: Some("300mg"),
        important: Some("May cause dizziness and drowsiness. Avoid alcohol."),
    },
    MedicationRecord {
        name: "Sumatriptan 50mg",
        description: "Triptan that relieves migraine headaches.",
        usage: &["Take at the first sign of migraine", "Take with water", "Do not exceed 200mg per day"],
        tags: &[Tag::Migraine, Tag::Triptan, Tag::Headache],
        color: solid(Pink),
        shape: Some(PillShape::Oval),
        dosage: Some("50mg"),
        important: Some("Do not use if you have heart disease or uncontrolled blood pressure."),
    },
    MedicationRecord {
        name: "Levothyroxine 50mcg",
        description: "Thyroid hormone replacement for hypothyroidism.",
        usage: &["Take on an empty stomach", "Wait 30-60 minutes before breakfast", "Take at the same time each day"],
        tags: &[Tag::Thyroid, Tag::HormoneReplacement, Tag::Hypothyroidism],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("50mcg"),
        important: Some("Avoid taking with calcium or iron supplements within 4 hours."),
    },
    MedicationRecord {
        name: "Loperamide 2mg",
        description: "Anti-diarrheal that slows bowel movements.",
        usage: &["Take after each loose stool", "Do not exceed 8mg per day", "Drink plenty of fluids"],
        tags: &[Tag::Diarrhea, Tag::AntiDiarrheal, Tag::Digestive],
        color: two_tone(Green, Gray),
        shape: Some(PillShape::Capsule),
        dosage: Some("2mg"),
        important: Some("Do not use if you have a fever or bloody stool. Consult a doctor if diarrhea lasts more than 2 days."),
    },
    MedicationRecord {
        name: "Acetaminophen Extra Strength 500mg",
        description: "Extra strength pain reliever and fever reducer in caplet form.",
        usage: &["Take with water", "Do not exceed 3000mg per day", "Wait 6 hours between doses"],
        tags: &[Tag::PainRelief, Tag::ExtraStrength, Tag::FeverReducer],
        color: solid(White),
        shape: Some(PillShape::Capsule),
        dosage: Some("500mg"),
        important: Some("Do not take with other products containing acetaminophen. Avoid alcohol while taking this medication."),
    },
    MedicationRecord {
        name: "Cephalexin 500mg",
        description: "Cephalosporin antibiotic for skin, ear and urinary tract infections.",
        usage: &[
            "Take every 6 to 12 hours as prescribed",
            "Complete the full course even if you feel better",
            "Take with or without food",
        ],
        tags: &[Tag::Antibiotic, Tag::Bacterial, Tag::InfectionTreatment],
        color: two_tone(Green, White),
        shape: Some(PillShape::Capsule),
        dosage: Some("500mg"),
        important: Some("Tell your doctor if you are allergic to penicillin. May cause diarrhea."),
    },
    MedicationRecord {
        name: "Nitrofurantoin 100mg",
        description: "Antibiotic used to treat and prevent urinary tract infections.",
        usage: &["Take with food", "Take every 12 hours for the prescribed days", "Drink plenty of water"],
        tags: &[Tag::Antibiotic, Tag::UtiTreatment, Tag::Bacterial],
        color: solid(Yellow),
        shape: Some(PillShape::Capsule),
        dosage: Some("100mg"),
        important: Some("May turn urine dark yellow or brown. Do not use with severe kidney disease."),
    },
    MedicationRecord {
        name: "Clarithromycin 500mg",
        description: "Macrolide antibiotic for respiratory and skin infections.",
        usage: &[
            "Take every 12 hours",
            "Take with water",
            "Complete the full course even if you feel better",
        ],
        tags: &[Tag::Antibiotic, Tag::Respiratory, Tag::Bacterial],
        color: solid(Yellow),
        shape: Some(PillShape::Oval),
        dosage: Some("500mg"),
        important: Some("Interacts with many medications. Tell your doctor about everything you take."),
    },
    MedicationRecord {
        name: "Minocycline 100mg",
        description: "Tetracycline antibiotic often used for acne.",
        usage: &[
            "Take with a full glass of water",
            "Do not lie down for 30 minutes after taking",
            "Avoid taking with dairy products",
        ],
        tags: &[Tag::Antibiotic, Tag::AcneTreatment, Tag::Skin],
        color: two_tone(Gray, White),
        shape: Some(PillShape::Capsule),
        dosage: Some("100mg"),
        important: Some("May cause dizziness and sensitivity to sunlight. Do not use during pregnancy."),
    },
    MedicationRecord {
        name: "Glipizide 5mg",
        description: "Sulfonylurea that lowers blood sugar in type 2 diabetes.",
        usage: &["Take 30 minutes before breakfast", "Do not skip meals", "Monitor blood sugar regularly"],
        tags: &[Tag::Diabetes, Tag::InsulinStimulator, Tag::Type2],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("5mg"),
        important: Some("Can cause low blood sugar. Carry a source of sugar with you."),
    },
    MedicationRecord {
        name: "Losartan 50mg",
        description: "Angiotensin receptor blocker for high blood pressure.",
        usage: &[
            "Take once daily",
            "Take with or without food",
            "Do not stop taking without consulting your doctor",
        ],
        tags: &[Tag::BloodPressure, Tag::Hypertension, Tag::Heart],
        color: solid(Green),
        shape: Some(PillShape::Oval),
        dosage: Some("50mg"),
        important: Some("Do not use during pregnancy. May raise potassium levels."),
    },
    MedicationRecord {
        name: "Enalapril 10mg",
        description: "ACE inhibitor for high blood pressure and heart failure.",
        usage: &[
            "Take at the same time each day",
            "Take with water",
            "Avoid potassium supplements unless prescribed",
        ],
        tags: &[Tag::BloodPressure, Tag::AceInhibitor, Tag::HeartFailure],
        color: solid(Orange),
        shape: Some(PillShape::Round),
        dosage: Some("10mg"),
        important: Some("May cause a dry cough. Seek help immediately for swelling of the face or throat."),
    },
    MedicationRecord {
        name: "Carvedilol 25mg",
        description: "Beta-blocker for heart failure and high blood pressure.",
        usage: &["Take with food", "Take twice daily", "Do not stop suddenly"],
        tags: &[Tag::BetaBlocker, Tag::HeartFailure, Tag::HeartRhythm],
        color: solid(White),
        shape: Some(PillShape::Oval),
        dosage: Some("25mg"),
        important: Some("May cause dizziness when standing up. Stopping suddenly can worsen heart problems."),
    },
    MedicationRecord {
        name: "Rosuvastatin 10mg",
        description: "Statin that lowers LDL cholesterol.",
        usage: &["Take once daily", "Take with or without food", "Follow a low-fat diet"],
        tags: &[Tag::Cholesterol, Tag::Statin, Tag::Cardiovascular],
        color: solid(Pink),
        shape: Some(PillShape::Round),
        dosage: Some("10mg"),
        important: Some("Report unexplained muscle pain or weakness. Avoid large amounts of alcohol."),
    },
    MedicationRecord {
        name: "Pantoprazole 40mg",
        description: "Proton pump inhibitor for acid reflux and stomach ulcers.",
        usage: &["Take 30 minutes before a meal", "Swallow whole, do not crush", "Take once daily"],
        tags: &[Tag::AcidReflux, Tag::Gerd, Tag::AcidReducer],
        color: solid(Yellow),
        shape: Some(PillShape::Oval),
        dosage: Some("40mg"),
        important: Some("Long-term use may lower magnesium and vitamin B12 levels."),
    },
    MedicationRecord {
        name: "Fexofenadine 180mg",
        description: "Non-drowsy antihistamine for seasonal allergies.",
        usage: &["Take with water", "Avoid fruit juice within 4 hours", "Take once daily"],
        tags: &[Tag::Allergy, Tag::Antihistamine, Tag::NonDrowsy, Tag::HayFever],
        color: solid(Orange),
        shape: Some(PillShape::Oval),
        dosage: Some("180mg"),
        important: Some("Do not take with antacids containing aluminum or magnesium."),
    },
    MedicationRecord {
        name: "Escitalopram 10mg",
        description: "SSRI antidepressant for depression and anxiety.",
        usage: &["Take once daily", "Take with or without food", "May take several weeks to work"],
        tags: &[Tag::Antidepressant, Tag::Ssri, Tag::Anxiety],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("10mg"),
        important: Some("Do not stop suddenly. Contact a doctor if mood worsens or suicidal thoughts occur."),
    },
    MedicationRecord {
        name: "Fluoxetine 20mg",
        description: "SSRI antidepressant for depression and OCD.",
        usage: &["Take in the morning", "Take with or without food", "May take several weeks to work"],
        tags: &[Tag::Antidepressant, Tag::Ssri, Tag::Ocd],
        color: two_tone(Green, Yellow),
        shape: Some(PillShape::Capsule),
        dosage: Some("20mg"),
        important: Some("Do not combine with MAO inhibitors. Contact a doctor if mood worsens."),
    },
    MedicationRecord {
        name: "Calcium + Vitamin D 600mg",
        description: "Calcium supplement with vitamin D for bone health.",
        usage: &[
            "Take with food",
            "Do not exceed 2 tablets per day",
            "Separate from thyroid medication by 4 hours",
        ],
        tags: &[Tag::Calcium, Tag::BoneHealth, Tag::Supplement],
        color: solid(White),
        shape: Some(PillShape::Oval),
        dosage: Some("600mg"),
        important: Some("May cause constipation. Consult a doctor if you have kidney stones."),
    },
    MedicationRecord {
        name: "Multivitamin",
        description: "Daily vitamin and mineral supplement.",
        usage: &["Take with food", "Take once daily", "Do not exceed the recommended dose"],
        tags: &[Tag::Vitamin, Tag::Supplement, Tag::GeneralHealth, Tag::ImmuneSystem],
        color: solid(Orange),
        shape: Some(PillShape::Oval),
        dosage: None,
        important: Some("Keep out of reach of children. Iron can be harmful in overdose."),
    },
    MedicationRecord {
        name: "Valacyclovir 500mg",
        description: "Antiviral for herpes and shingles outbreaks.",
        usage: &[
            "Start at the first sign of symptoms",
            "Drink plenty of fluids",
            "Take with or without food",
        ],
        tags: &[Tag::Antiviral, Tag::Herpes, Tag::Shingles],
        color: solid(Blue),
        shape: Some(PillShape::Oval),
        dosage: Some("500mg"),
        important: Some("Does not cure herpes. Reduce the dose with kidney problems."),
    },
    MedicationRecord {
        name: "Prednisone 10mg",
        description: "Corticosteroid that reduces inflammation and immune response.",
        usage: &["Take with food", "Take in the morning", "Do not stop suddenly"],
        tags: &[Tag::Corticosteroid, Tag::AntiInflammatory, Tag::Asthma],
        color: solid(White),
        shape: Some(PillShape::Round),
        dosage: Some("10mg"),
        important: Some("Long-term use needs a gradual taper. May raise blood sugar."),
    },
    MedicationRecord {
        name: "Pregabalin 75mg",
        description: "Treats nerve pain and partial seizures.",
        usage: &["Take twice daily", "Take with or without food", "Avoid alcohol"],
        tags: &[Tag::NervePain, Tag::Neuropathic, Tag::Seizures],
        color: two_tone(White, Orange),
        shape: Some(PillShape::Capsule),
        dosage: Some("75mg"),
        important: Some("May cause dizziness and drowsiness. Do not stop suddenly."),
    },
    MedicationRecord {
        name: "Alendronate 70mg",
        description: "Bisphosphonate that strengthens bones in osteoporosis.",
        usage: &[
            "Take once weekly on an empty stomach",
            "Take with a full glass of water",
            "Stay upright for 30 minutes after taking",
        ],
        tags: &[Tag::Osteoporosis, Tag::Bisphosphonate, Tag::BoneHealth],
        color: solid(White),
        shape: Some(PillShape::Oval),
        dosage: Some("70mg"),
        important: Some("Stop and consult a doctor if you have trouble swallowing or chest pain."),
    },
    MedicationRecord {
        name: "Bisacodyl 5mg",
        description: "Stimulant laxative for occasional constipation.",
        usage: &[
            "Take at bedtime",
            "Swallow whole, do not crush",
            "Do not take within 1 hour of antacids or milk",
        ],
        tags: &[Tag::Constipation, Tag::Laxative, Tag::Digestive],
        color: solid(Orange),
        shape: Some(PillShape::Round),
        dosage: Some("5mg"),
        important: Some("Do not use for more than 7 days without consulting a doctor."),
    },
    MedicationRecord {
        name: "Albendazole 400mg",
        description: "Anthelmintic used to treat worm infections.",
        usage: &["Take with food", "Chew or swallow whole", "Repeat only if prescribed"],
        tags: &[Tag::Anthelmintic, Tag::Worms, Tag::Parasite],
        color: solid(Red),
        shape: None,
        dosage: Some("400mg"),
        important: Some("Do not use during pregnancy. Consult a doctor before use in children under 2."),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_records_come_first() {
        let names: Vec<_> = CATALOG.iter().take(5).map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "Ibuprofen 200mg",
                "Amoxicillin 500mg",
                "Paracetamol 500mg",
                "Aspirin 100mg",
                "Metformin 500mg"
            ]
        );
    }

    #[test]
    fn catalog_covers_common_medications() {
        assert!(CATALOG.len() >= 50, "{}", CATALOG.len());
        let mut names: Vec<_> = CATALOG.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn every_record_is_complete() {
        for record in CATALOG {
            assert!(!record.name.is_empty());
            assert!(!record.description.is_empty(), "{}", record.name);
            assert!(!record.usage.is_empty(), "{}", record.name);
            assert!(!record.tags.is_empty(), "{}", record.name);
            assert!(!record.tags.contains(&Tag::Error), "{}", record.name);
        }
    }

    #[test]
    fn every_shape_is_represented() {
        for shape in [PillShape::Round, PillShape::Oval, PillShape::Capsule, PillShape::Square] {
            assert!(CATALOG.iter().any(|r| r.matches_shape(shape)), "{shape}");
        }
    }

    #[test]
    fn two_tone_record_matches_either_part() {
        let amoxicillin = &CATALOG[1];
        assert!(amoxicillin.matches_color(&ColorLabel::solid(White)));
        assert!(amoxicillin.matches_color(&ColorLabel::solid(Blue)));
        assert!(!amoxicillin.matches_color(&ColorLabel::solid(Yellow)));
    }

    #[test]
    fn record_without_shape_matches_no_shape() {
        let record = CATALOG.iter().find(|r| r.shape.is_none()).unwrap();
        assert!(PillShape::ALL.iter().all(|s| !record.matches_shape(*s)));
    }
}
