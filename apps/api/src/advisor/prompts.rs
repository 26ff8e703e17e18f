// Prompt template and user-facing notices for the remote advisor.

use crate::models::locale::LocalizedText;

/// Advisor prompt template.
/// Replace: {age}, {gender}, {state}, {occupation}, {income}, {category}, {language}
pub const ADVISOR_PROMPT_TEMPLATE: &str = r#"Act as an expert Government Policy Consultant for India.

**User Profile:**
- Age: {age}
- Gender: {gender}
- State: {state}
- Occupation: {occupation}
- Income Group: {income}
- Category: {category}

**Task:**
1. Identify exactly 3 major Government of India (Central, or State schemes specific to {state}) schemes this person is HIGHLY likely to be eligible for.
2. For each scheme, strictly explain WHY this specific user qualifies. Use this format:
   - **Scheme Name**
   - **One-line Benefit** (e.g. "Get ₹5,000 per month")
   - **WHY YOU QUALIFY:** "You qualify because you are [the specific age/gender/occupation/income/category criteria that match]." For example: "You qualify because you are {age} years old, belong to the {category} category, and your family income of {income} falls within the scheme's income limit."
   - **Key Documents Needed**
3. **Required Documents:** a consolidated list of all documents they will likely need across all 3 schemes.

**CRITICAL REQUIREMENTS:**
- Give SPECIFIC reasoning based on the user's exact profile values above.
- Mention the EXACT profile criteria that make them eligible: age ranges, income limits, category requirements.
- Output EVERYTHING in this language: **{language}**.
- Use clear, simple language suitable for a common citizen.
- Format with clear headings and bullet points."#;

/// Appended to partial output when the model hit its length limit.
pub fn truncation_notice() -> LocalizedText {
    LocalizedText::new(
        "⚠️ This response was cut short because it reached the maximum length. Try again for the complete answer.",
        "⚠️ यह उत्तर अधिकतम लंबाई तक पहुँचने के कारण अधूरा रह गया। पूरा उत्तर पाने के लिए फिर से प्रयास करें।",
        "⚠️ அதிகபட்ச நீளத்தை எட்டியதால் இந்தப் பதில் பாதியில் நின்றது. முழுப் பதிலுக்கு மீண்டும் முயற்சிக்கவும்.",
        "⚠️ గరిష్ట పొడవును చేరుకున్నందున ఈ సమాధానం మధ్యలో ఆగిపోయింది. పూర్తి సమాధానం కోసం మళ్లీ ప్రయత్నించండి.",
        "⚠️ ಗರಿಷ್ಠ ಉದ್ದವನ್ನು ತಲುಪಿದ್ದರಿಂದ ಈ ಉತ್ತರ ಅರ್ಧದಲ್ಲೇ ನಿಂತಿದೆ. ಪೂರ್ಣ ಉತ್ತರಕ್ಕಾಗಿ ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ.",
    )
}

/// Shown instead of any model text when the safety filter blocks a response.
pub fn blocked_notice() -> LocalizedText {
    LocalizedText::new(
        "The response was blocked by the content safety filter. Please review your details and try again.",
        "उत्तर को सामग्री सुरक्षा फ़िल्टर ने रोक दिया। कृपया अपना विवरण जाँचें और फिर से प्रयास करें।",
        "பதில் உள்ளடக்கப் பாதுகாப்பு வடிப்பானால் தடுக்கப்பட்டது. உங்கள் விவரங்களைச் சரிபார்த்து மீண்டும் முயற்சிக்கவும்.",
        "సమాధానాన్ని కంటెంట్ భద్రతా ఫిల్టర్ నిరోధించింది. దయచేసి మీ వివరాలను సరిచూసి మళ్లీ ప్రయత్నించండి.",
        "ಉತ್ತರವನ್ನು ವಿಷಯ ಸುರಕ್ಷತಾ ಫಿಲ್ಟರ್ ತಡೆದಿದೆ. ದಯವಿಟ್ಟು ನಿಮ್ಮ ವಿವರಗಳನ್ನು ಪರಿಶೀಲಿಸಿ ಮತ್ತೆ ಪ್ರಯತ್ನಿಸಿ.",
    )
}
