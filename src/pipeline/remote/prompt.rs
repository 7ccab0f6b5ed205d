/// Instruction sent with every photo. The reply is parsed by
/// [`super::parser::parse_reply`].
pub const IDENTIFY_PROMPT: &str = r#"Analyze this pill image and provide detailed information in JSON format. Include:
- name: Full name of the medication
- description: Brief description of what it's used for
- usage: Array of 3-5 usage instructions
- tags: Array of relevant tags (e.g., ["Pain relief", "Anti-inflammatory"])
- color: Color of the pill
- shape: Shape of the pill (Round, Capsule, Oval, etc.)
- dosage: Dosage information if visible
- important: Important warnings or precautions

Return ONLY valid JSON without markdown formatting. Example format:
{
  "name": "Ibuprofen 200mg",
  "description": "Nonsteroidal anti-inflammatory drug used for pain relief",
  "usage": ["Take with food", "Do not exceed 1200mg per day", "Wait 4-6 hours between doses"],
  "tags": ["Pain relief", "Anti-inflammatory"],
  "color": "White",
  "shape": "Round",
  "dosage": "200mg",
  "important": "Do not use if you have stomach ulcers"
}

If you cannot identify the pill clearly, provide your best estimate based on visual characteristics."#;

pub const MAX_TOKENS: u32 = 1000;
