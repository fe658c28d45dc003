//! Prompt templates. Rendering is deterministic: same question, scenario,
//! and passages always produce byte-identical prompts.

/// System prompt establishing the analyst role and the capital rules.
pub const SYSTEM_PROMPT: &str = "You are an expert financial regulatory analyst specializing in COREP (Common Reporting) regulatory frameworks, particularly the PRA rulebooks and CRR (Capital Requirements Regulation).

Your task is to analyze scenarios and classify financial items according to COREP reporting templates, specifically the Own Funds template C01.00.

You must:
1. Carefully read the provided regulatory rule excerpts
2. Analyze the scenario with specific numerical values
3. Determine the correct template rows and columns for each item
4. Provide clear justifications citing specific rules
5. Output structured JSON that maps items to template positions

Key principles:
- Common Equity Tier 1 (CET1) includes: ordinary shares, share premium, retained earnings (minus deductions)
- Deductions from CET1 include: intangible assets, deferred tax assets, certain holdings
- Additional Tier 1 (AT1): specific instruments meeting criteria
- Tier 2: subordinated debt, certain provisions
- Deduction amounts must be negative
- Cite chunks by the exact Chunk ID shown in their header
- Values must be numeric (in currency units)
- Row and column codes follow COREP naming conventions (e.g., \"010\", \"020\")";

/// Render the analysis prompt embedding the schema description, the
/// formatted passages, the scenario, and the question.
pub fn render_analysis_prompt(question: &str, scenario: &str, formatted_rules: &str) -> String {
    format!(
        "{system}\n\n\
## USER QUESTION\n{question}\n\n\
## SCENARIO TO ANALYZE\n{scenario}\n\n\
## RELEVANT REGULATORY RULES\n\
The following rule excerpts have been retrieved from the regulatory documents:\n\n\
{formatted_rules}\n\
## YOUR TASK\n\n\
Based on the regulatory rules above and the scenario provided:\n\n\
1. Identify each financial item mentioned in the scenario\n\
2. For each item, specify the template row code, column code, signed numeric value, capital category, a justification citing the specific rule, and the chunk ids the justification rests on\n\
3. Output your analysis as JSON following this EXACT schema:\n\n\
{{\n\
  \"template\": \"C01.00\",\n\
  \"fields\": [\n\
    {{\n\
      \"row\": \"010\",\n\
      \"column\": \"010\",\n\
      \"value\": 10000000,\n\
      \"item_name\": \"Share capital\",\n\
      \"category\": \"cet1\",\n\
      \"justification\": \"Ordinary share capital qualifies as CET1 under Article 26 CRR...\",\n\
      \"citations\": [\"chunk-0001\"]\n\
    }}\n\
  ]\n\
}}\n\n\
## IMPORTANT\n\
- Output ONLY the JSON object, no other text\n\
- Ensure all values are numeric (not strings); deductions must be negative\n\
- Row and column codes must be strings (e.g., \"010\", not 10)\n\
- \"category\" must be one of: \"cet1\", \"at1\", \"t2\", \"deduction\", \"other\"\n\
- \"citations\" must list Chunk IDs copied verbatim from the rule excerpts above\n",
        system = SYSTEM_PROMPT,
        question = question,
        scenario = scenario,
        formatted_rules = formatted_rules,
    )
}

/// Correction prompt for the single repair retry after malformed output.
pub fn render_repair_prompt(original_prompt: &str, malformed_output: &str, error: &str) -> String {
    format!(
        "{original}\n\n\
## CORRECTION REQUIRED\n\
Your previous response was malformed and could not be parsed as the required JSON schema.\n\
Parse error: {error}\n\n\
Previous response (do not repeat this mistake):\n{previous}\n\n\
Respond again with ONLY the JSON object, exactly matching the schema above.\n",
        original = original_prompt,
        error = error,
        previous = truncate(malformed_output, 2_000),
    )
}

/// Bound a string to `max` bytes on a char boundary.
pub(crate) fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
