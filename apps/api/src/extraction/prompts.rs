// Extraction prompt. The response shape itself is enforced by the schema
// constraint attached to the request; the instruction covers intent and
// the empty-field conventions.

pub const EXTRACT_INSTRUCTION: &str = "\
You are an expert resume parser for a professional portfolio website. \
Analyze the provided resume file and extract the information into a valid JSON object. \
Do not include any text, markdown, or formatting outside of the JSON object itself. \
Adhere strictly to the provided JSON schema. \
If a section like 'projects' is not found, return an empty array for that key. \
If a value for a field like 'imageUrl' or 'phone' cannot be found in the resume, \
return an empty string for it. \
Ensure all required fields in the schema are present.";
