//! llm/prompt.rs
//!
//! Builds the single enrollment instruction sent to the generator. The
//! four answers are embedded verbatim as context only; the guidelines
//! forbid the model from echoing them into the profile fields.

use crate::state::UserResponses;

pub fn build_prompt(data: &UserResponses) -> String {
    let mut out = String::new();

    out.push_str(
        "Create a high-tech, cool secret agent identity for a child based on \
         their personal \"Neural Fingerprint\" (provided below).\n\n",
    );

    /* ---------- FINGERPRINT ---------- */
    out.push_str("NEURAL FINGERPRINT DATA:\n");
    out.push_str(&format!(
        "- Primary Spectrum Preference: {}\n",
        data.favorite_color
    ));
    out.push_str(&format!("- Biological Affinity: {}\n", data.favorite_animal));
    out.push_str(&format!("- Sustenance Index: {}\n", data.favorite_snack));
    out.push_str(&format!("- Temporal Origin: {}\n\n", data.birth_month));

    /* ---------- GUIDELINES ---------- */
    out.push_str("STRICT OPERATIONAL GUIDELINES:\n");
    out.push_str(
        "1. CHILD SAFETY: All output must be strictly child-appropriate, heroic, \
         and professional. If the input contains inappropriate words, ignore them \
         and generate a standard heroic spy profile instead.\n",
    );
    out.push_str(
        "2. NO LITERAL USAGE: Do not use the user's input words directly in the \
         names or profile fields. Use them as \"vibes\" (e.g., \"Shark\" affinity \
         leads to a \"Deep Sea\" or \"Hydro\" theme).\n",
    );
    out.push_str(
        "3. FULL NAME: Generate a cool-sounding fictional full name \
         (e.g., \"Sebastian Sterling\", \"Luna Lockheart\").\n",
    );
    out.push_str("4. LAST NAME: Provide just the last name from the full name.\n");
    out.push_str("5. RANK: A high-tech title like \"Stealth Operative\" or \"Cyber-Sentinel\".\n");
    out.push_str(
        "6. SPECIALTY: A unique skill inspired by the affinity \
         (e.g., \"Night-Vision Surveillance\").\n",
    );
    out.push_str(
        "7. LAST KNOWN LOCATION: Select a random famous city from anywhere in \
         the world (e.g., Tokyo, Paris, Cairo, New York).\n",
    );
    out.push_str("8. CLEARANCE LEVEL: A number from 1 to 5.\n");

    out
}
