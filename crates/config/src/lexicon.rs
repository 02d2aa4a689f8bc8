//! Chat lexicon
//!
//! Per-language keyword lists, entity vocabularies and response templates
//! for the fixed set of chat intents. Keyword and vocabulary order matters:
//! the classifier counts keywords as substrings, and the extractor takes
//! the first vocabulary term found, so these lists are position-sensitive.
//!
//! Any language missing from a table falls back to the English row.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use agri_advisor_core::intent::EntityKind;
use agri_advisor_core::{Intent, Language};

/// Keyword, vocabulary and template tables for the chat assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Intent detection keywords, per intent per language
    #[serde(default)]
    pub keywords: HashMap<Intent, HashMap<Language, Vec<String>>>,
    /// Response templates with `{name}` placeholders, per intent per language
    #[serde(default)]
    pub templates: HashMap<Intent, HashMap<Language, String>>,
    /// Crop vocabulary for entity extraction
    #[serde(default)]
    pub crop_vocabulary: HashMap<Language, Vec<String>>,
    /// Pest vocabulary for entity extraction
    #[serde(default)]
    pub pest_vocabulary: HashMap<Language, Vec<String>>,
    /// Help message shown when no intent matches
    #[serde(default)]
    pub help: HashMap<Language, String>,
    /// Image diagnosis template for confident detections ({label}, {treatment})
    #[serde(default)]
    pub image_confident: HashMap<Language, String>,
    /// Image hedge template for low-confidence detections ({label})
    #[serde(default)]
    pub image_uncertain: HashMap<Language, String>,
    /// Response for a healthy-looking crop image
    #[serde(default)]
    pub image_healthy: HashMap<Language, String>,
}

impl Lexicon {
    /// Keyword list for an intent in a language, English row as fallback
    pub fn keywords(&self, intent: Intent, language: Language) -> &[String] {
        self.keywords
            .get(&intent)
            .and_then(|by_lang| {
                by_lang
                    .get(&language)
                    .or_else(|| by_lang.get(&Language::English))
            })
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Response template for an intent, English row as fallback
    pub fn template(&self, intent: Intent, language: Language) -> Option<&str> {
        self.templates.get(&intent).and_then(|by_lang| {
            by_lang
                .get(&language)
                .or_else(|| by_lang.get(&Language::English))
                .map(String::as_str)
        })
    }

    /// Entity vocabulary for a kind in a language, English row as fallback
    pub fn vocabulary(&self, kind: EntityKind, language: Language) -> &[String] {
        let table = match kind {
            EntityKind::Crop => &self.crop_vocabulary,
            EntityKind::Pest => &self.pest_vocabulary,
        };
        table
            .get(&language)
            .or_else(|| table.get(&Language::English))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Default help message when no intent is detected
    pub fn help(&self, language: Language) -> &str {
        lang_str(&self.help, language)
    }

    pub fn image_confident(&self, language: Language) -> &str {
        lang_str(&self.image_confident, language)
    }

    pub fn image_uncertain(&self, language: Language) -> &str {
        lang_str(&self.image_uncertain, language)
    }

    pub fn image_healthy(&self, language: Language) -> &str {
        lang_str(&self.image_healthy, language)
    }
}

fn lang_str(table: &HashMap<Language, String>, language: Language) -> &str {
    table
        .get(&language)
        .or_else(|| table.get(&Language::English))
        .map(String::as_str)
        .unwrap_or("")
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        use Language::*;

        let mut keywords = HashMap::new();
        keywords.insert(
            Intent::Fertilizer,
            HashMap::from([
                (English, words(&["fertilizer", "nutrient", "manure", "grow", "soil food"])),
                (Hindi, words(&["उर्वरक", "पोषक तत्व", "खाद", "बढ़ाना", "मिट्टी का भोजन"])),
                (Punjabi, words(&["ਖਾਦ", "ਪੋਸ਼ਕ ਤੱਤ", "ਰੂੜੀ", "ਵਧਾਉਣਾ", "ਮਿੱਟੀ ਦਾ ਭੋਜਨ"])),
                (Telugu, words(&["ఎరువు", "పోషకాలు", "పెరుగుదల", "నేల ఆహారం"])),
                (Tamil, words(&["உரம்", "ஊட்டச்சத்து", "எரு", "வளர", "மண் உணவு"])),
                (Bengali, words(&["সার", "পুষ্টি", "গোবর", "বৃদ্ধি", "মাটির খাবার"])),
            ]),
        );
        keywords.insert(
            Intent::Pest,
            HashMap::from([
                (English, words(&["pest", "insect", "bug", "disease", "infestation"])),
                (Hindi, words(&["कीट", "कीड़ा", "रोग", "संक्रमण"])),
                (Punjabi, words(&["ਕੀਟ", "ਕੀੜਾ", "ਰੋਗ", "ਲਾਗ"])),
                (Telugu, words(&["తెగులు", "పురుగు", "వ్యాధి", "సంక్రమణ"])),
                (Tamil, words(&["பூச்சி", "நோய்", "தொற்று"])),
                (Bengali, words(&["পোকা", "রোগ", "সংক্রমণ"])),
            ]),
        );
        keywords.insert(
            Intent::Weather,
            HashMap::from([
                (English, words(&["weather", "forecast", "rain", "temperature", "climate"])),
                (Hindi, words(&["मौसम", "पूर्वानुमान", "बारिश", "तापमान", "जलवायु"])),
                (Punjabi, words(&["ਮੌਸਮ", "ਭਵਿੱਖਬਾਣੀ", "ਮੀਂਹ", "ਤਾਪਮਾਨ", "ਜਲਵਾਯੂ"])),
                (Telugu, words(&["వాతావరణం", "అంచనా", "వర్షం", "ఉష్ణోగ్రత", "శీతోష్ణస్థితి"])),
                (Tamil, words(&["வானிலை", "முன்னறிவிப்பு", "மழை", "வெப்பநிலை", "காலநிலை"])),
                (Bengali, words(&["আবহাওয়া", "পূর্বাভাস", "বৃষ্টি", "তাপমাত্রা", "জলবায়ু"])),
            ]),
        );
        keywords.insert(
            Intent::Market,
            HashMap::from([
                (English, words(&["market", "price", "rate", "sell", "buy"])),
                (Hindi, words(&["बाजार", "कीमत", "दर", "बेचना", "खरीदना"])),
                (Punjabi, words(&["ਬਾਜ਼ਾਰ", "ਕੀਮਤ", "ਦਰ", "ਵੇਚਣਾ", "ਖਰੀਦਣਾ"])),
                (Telugu, words(&["మార్కెట్", "ధర", "రేటు", "అమ్మకం", "కొనుగోలు"])),
                (Tamil, words(&["சந்தை", "விலை", "விகிதம்", "விற்க", "வாங்க"])),
                (Bengali, words(&["বাজার", "দাম", "হার", "বিক্রয়", "কেনা"])),
            ]),
        );
        keywords.insert(
            Intent::Soil,
            HashMap::from([
                (English, words(&["soil", "health", "nitrogen", "phosphorus", "potassium", "ph"])),
                (Hindi, words(&["मिट्टी", "स्वास्थ्य", "नाइट्रोजन", "फास्फोरस", "पोटेशियम", "पीएच"])),
                (Punjabi, words(&["ਮਿੱਟੀ", "ਸਿਹਤ", "ਨਾਈਟ੍ਰੋਜਨ", "ਫਾਸਫੋਰਸ", "ਪੋਟਾਸ਼ੀਅਮ", "ਪੀਐਚ"])),
                (Telugu, words(&["నేల", "ఆరోగ్యం", "నత్రజని", "ఫాస్ఫరస్", "పొటాషియం", "పిహెచ్"])),
                (Tamil, words(&["மண்", "ஆரோக்கியம்", "நைட்ரஜன்", "பாஸ்பரஸ்", "பொட்டாசியம்", "ph"])),
                (Bengali, words(&["মাটি", "স্বাস্থ্য", "নাইট্রোজেন", "ফসফরাস", "পটাশিয়াম", "পিএইচ"])),
            ]),
        );

        let mut templates = HashMap::new();
        templates.insert(
            Intent::Fertilizer,
            HashMap::from([
                (English, "Based on your crop and soil, I recommend: {recommendation}".to_string()),
                (Hindi, "आपकी फसल और मिट्टी के आधार पर, मैं सलाह देता हूँ: {recommendation}".to_string()),
                (Punjabi, "ਤੁਹਾਡੀ ਫਸਲ ਅਤੇ ਮਿੱਟੀ ਦੇ ਆਧਾਰ 'ਤੇ, ਮੈਂ ਸਿਫ਼ਾਰਸ਼ ਕਰਦਾ ਹਾਂ: {recommendation}".to_string()),
                (Telugu, "మీ పంట మరియు నేల ఆధారంగా, నేను సిఫార్సు చేస్తున్నాను: {recommendation}".to_string()),
                (Tamil, "உங்கள் பயிர் மற்றும் மண்ணின் அடிப்படையில், நான் பரிந்துரைக்கிறேன்: {recommendation}".to_string()),
                (Bengali, "আপনার ফসল এবং মাটির উপর ভিত্তি করে, আমি সুপারিশ করছি: {recommendation}".to_string()),
            ]),
        );
        templates.insert(
            Intent::Pest,
            HashMap::from([
                (English, "For {pest_name}, I recommend: {treatment}".to_string()),
                (Hindi, "{pest_name} के लिए, मैं सलाह देता हूँ: {treatment}".to_string()),
                (Punjabi, "{pest_name} ਲਈ, ਮੈਂ ਸਿਫ਼ਾਰਸ਼ ਕਰਦਾ ਹਾਂ: {treatment}".to_string()),
                (Telugu, "{pest_name} కోసం, నేను సిఫార్సు చేస్తున్నాను: {treatment}".to_string()),
                (Tamil, "{pest_name} க்கு, நான் பரிந்துரைக்கிறேன்: {treatment}".to_string()),
                (Bengali, "{pest_name} এর জন্য, আমি সুপারিশ করছি: {treatment}".to_string()),
            ]),
        );
        templates.insert(
            Intent::Weather,
            HashMap::from([
                (English, "The weather in {location} is {condition} with a temperature of {temp}°C.".to_string()),
                (Hindi, "{location} में मौसम {condition} है और तापमान {temp}°C है।".to_string()),
                (Punjabi, "{location} ਵਿੱਚ ਮੌਸਮ {condition} ਹੈ ਅਤੇ ਤਾਪਮਾਨ {temp}°C ਹੈ।".to_string()),
                (Telugu, "{location} లో వాతావరణం {condition} మరియు ఉష్ణోగ్రత {temp}°C.".to_string()),
                (Tamil, "{location} இல் வானிலை {condition} மற்றும் வெப்பநிலை {temp}°C.".to_string()),
                (Bengali, "{location} এ আবহাওয়া {condition} এবং তাপমাত্রা {temp}°C।".to_string()),
            ]),
        );
        templates.insert(
            Intent::Market,
            HashMap::from([
                (English, "The current market price for {crop} is {price} per quintal in {mandi}.".to_string()),
                (Hindi, "{crop} का वर्तमान बाजार मूल्य {mandi} में {price} प्रति क्विंटल है।".to_string()),
                (Punjabi, "{crop} ਦਾ ਮੌਜੂਦਾ ਬਾਜ਼ਾਰ ਮੁੱਲ {mandi} ਵਿੱਚ {price} ਪ੍ਰਤੀ ਕੁਇੰਟਲ ਹੈ।".to_string()),
                (Telugu, "{crop} యొక్క ప్రస్తుత మార్కెట్ ధర {mandi} లో {price} ప్రతి క్వింటాల్.".to_string()),
                (Tamil, "{crop} இன் தற்போதைய சந்தை விலை {mandi} இல் {price} ஒரு குவிண்டால்.".to_string()),
                (Bengali, "{crop} এর বর্তমান বাজার মূল্য {mandi} এ {price} প্রতি কুইন্টাল।".to_string()),
            ]),
        );
        templates.insert(
            Intent::Soil,
            HashMap::from([
                (English, "Your soil has Nitrogen: {nitrogen_level}, Phosphorus: {phosphorus_level}, Potassium: {potassium_level}, and pH: {ph_level}.".to_string()),
                (Hindi, "आपकी मिट्टी में नाइट्रोजन: {nitrogen_level}, फास्फोरस: {phosphorus_level}, पोटेशियम: {potassium_level}, और पीएच: {ph_level} है।".to_string()),
                (Punjabi, "ਤੁਹਾਡੀ ਮਿੱਟੀ ਵਿੱਚ ਨਾਈਟ੍ਰੋਜਨ: {nitrogen_level}, ਫਾਸਫੋਰਸ: {phosphorus_level}, ਪੋਟਾਸ਼ੀਅਮ: {potassium_level}, ਅਤੇ ਪੀਐਚ: {ph_level} ਹੈ।".to_string()),
                (Telugu, "మీ నేలలో నత్రజని: {nitrogen_level}, ఫాస్ఫరస్: {phosphorus_level}, పొటాషియం: {potassium_level}, మరియు పిహెచ్: {ph_level} ఉంది.".to_string()),
                (Tamil, "உங்கள் மண்ணில் நைட்ரஜன்: {nitrogen_level}, பாஸ்பரஸ்: {phosphorus_level}, பொட்டாசியம்: {potassium_level}, மற்றும் pH: {ph_level} உள்ளது.".to_string()),
                (Bengali, "আপনার মাটিতে নাইট্রোজেন: {nitrogen_level}, ফসফরাস: {phosphorus_level}, পটাশিয়াম: {potassium_level}, এবং পিএইচ: {ph_level} আছে।".to_string()),
            ]),
        );

        let crop_vocabulary = HashMap::from([
            (English, words(&["wheat", "rice", "maize", "cotton", "sugarcane"])),
            (Hindi, words(&["गेहूं", "चावल", "मक्का", "कपास", "गन्ना"])),
            (Punjabi, words(&["ਕਣਕ", "ਚਾਵਲ", "ਮੱਕੀ", "ਕਪਾਹ", "ਗੰਨਾ"])),
            (Telugu, words(&["గోధుమ", "వరి", "మొక్కజొన్న", "పత్తి", "చెరకు"])),
            (Tamil, words(&["கோதுமை", "நெல்", "சோளம்", "பருத்தி", "கரும்பு"])),
            (Bengali, words(&["গম", "চাল", "ভুট্টা", "তুলা", "আখ"])),
        ]);

        let pest_vocabulary = HashMap::from([
            (English, words(&["aphid", "blight", "rust", "fungus", "bollworm"])),
            (Hindi, words(&["एफिड", "ब्लाइट", "रस्ट", "फंगस", "बोलवर्म"])),
            (Punjabi, words(&["ਐਫਿਡ", "ਬਲਾਈਟ", "ਰਸਟ", "ਫੰਗਸ", "ਬੋਲਵਰਮ"])),
            (Telugu, words(&["యాఫిడ్", "బ్లైట్", "తుప్పు", "ఫంగస్", "బాల్‌వార్మ్"])),
            (Tamil, words(&["ஆஃபிட்", "பிளைட்", "துரு", "பூசணம்", "பஞ்சுப்பூச்சி"])),
            (Bengali, words(&["আফিড", "ব্লাইট", "রাস্ট", "ছত্রাক", "বোলওয়ার্ম"])),
        ]);

        let help = HashMap::from([
            (English, "I'm here to help with crop selection, pest control, fertilizer advice, weather updates, and market prices. You can also send images of your crops for analysis. What would you like to know?".to_string()),
            (Hindi, "मैं फसल चयन, कीट नियंत्रण, उर्वरक सलाह, मौसम अपडेट और बाजार मूल्यों में आपकी मदद करने के लिए यहाँ हूँ। आप विश्लेषण के लिए अपनी फसलों की छवियां भी भेज सकते हैं। आप क्या जानना चाहेंगे?".to_string()),
            (Punjabi, "ਮੈਂ ਫਸਲ ਚੋਣ, ਕੀਟ ਨਿਯੰਤਰਣ, ਖਾਦ ਸਲਾਹ, ਮੌਸਮ ਅਪਡੇਟ ਅਤੇ ਮਾਰਕੀਟ ਕੀਮਤਾਂ ਨਾਲ ਤੁਹਾਡੀ ਮਦਦ ਕਰਨ ਲਈ ਇੱਥੇ ਹਾਂ। ਤੁਸੀਂ ਆਪਣੀਆਂ ਫਸਲਾਂ ਦੀਆਂ ਤਸਵੀਰਾਂ ਵਿਸ਼ਲੇਸ਼ਣ ਲਈ ਭੇਜ ਸਕਦੇ ਹੋ। ਤੁਸੀਂ ਕੀ ਜਾਣਨਾ ਚਾਹੁੰਦੇ ਹੋ?".to_string()),
            (Telugu, "పంట ఎంపిక, పురుగు నియంత్రణ, ఎరువు సలహా, వాతావరణ నవీకరణలు మరియు మార్కెట్ ధరలతో మీకు సహాయం చేయడానికి ఇక్కడ ఉన్నాను. మీ పంటల చిత్రాలను విశ్లేషణ కోసం కూడా పంపవచ్చు. మీరు ఏమి తెలుసుకోవాలనుకుంటున్నారు?".to_string()),
            (Tamil, "பயிர் தேர்வு, பூச்சி கட்டுப்பாடு, உரம் ஆலோசனை, வானிலை புதுப்பிப்புகள் மற்றும் சந்தை விலைகளுடன் உங்களுக்கு உதவ இங்கே இருக்கிறேன். பகுப்பாய்வுக்கு உங்கள் பயிர்களின் படங்களையும் அனுப்பலாம். நீங்கள் என்ன தெரிந்துகொள்ள விரும்புகிறீர்கள்?".to_string()),
            (Bengali, "আমি ফসল নির্বাচন, পোকা নিয়ন্ত্রণ, সার পরামর্শ, আবহাওয়া আপডেট এবং বাজার মূল্যের সাথে আপনাকে সাহায্য করতে এখানে। আপনি বিশ্লেষণের জন্য আপনার ফসলের ছবিও পাঠাতে পারেন। আপনি কি জানতে চান?".to_string()),
        ]);

        let image_confident = HashMap::from([
            (English, "I've detected {label} in your crop with high confidence. I recommend: {treatment}".to_string()),
            (Hindi, "मैंने आपकी फसल में उच्च विश्वास के साथ {label} का पता लगाया है। मैं सलाह देता हूँ: {treatment}".to_string()),
            (Punjabi, "ਮੈਂ ਤੁਹਾਡੀ ਫਸਲ ਵਿੱਚ ਉੱਚ ਵਿਸ਼ਵਾਸ ਨਾਲ {label} ਦੀ ਖੋਜ ਕੀਤੀ ਹੈ। ਮੈਂ ਸਿਫ਼ਾਰਸ਼ ਕਰਦਾ ਹਾਂ: {treatment}".to_string()),
            (Telugu, "మీ పంటలో {label} ను అధిక విశ్వాసంతో గుర్తించాను. నేను సిఫార్సు చేస్తున్నాను: {treatment}".to_string()),
            (Tamil, "உங்கள் பயிரில் {label} ஐ அதிக நம்பிக்கையுடன் கண்டறிந்தேன். நான் பரிந்துரைக்கிறேன்: {treatment}".to_string()),
            (Bengali, "আমি আপনার ফসলে উচ্চ আত্মবিশ্বাসের সাথে {label} সনাক্ত করেছি। আমি সুপারিশ করছি: {treatment}".to_string()),
        ]);

        let image_uncertain = HashMap::from([
            (English, "I think there might be {label} in your crop, but I'm not completely sure. Could you send a clearer image?".to_string()),
            (Hindi, "मुझे लगता है कि आपकी फसल में {label} हो सकता है, लेकिन मैं पूरी तरह निश्चित नहीं हूँ। क्या आप एक स्पष्ट छवि भेज सकते हैं?".to_string()),
            (Punjabi, "ਮੈਨੂੰ ਲੱਗਦਾ ਹੈ ਕਿ ਤੁਹਾਡੀ ਫਸਲ ਵਿੱਚ {label} ਹੋ ਸਕਦਾ ਹੈ, ਪਰ ਮੈਂ ਪੂਰੀ ਤਰ੍ਹਾਂ ਯਕੀਨੀ ਨਹੀਂ ਹਾਂ। ਕੀ ਤੁਸੀਂ ਇੱਕ ਸਾਫ਼ ਚਿੱਤਰ ਭੇਜ ਸਕਦੇ ਹੋ?".to_string()),
            (Telugu, "మీ పంటలో {label} ఉండవచ్చని అనుకుంటున్నాను, కానీ ఖచ్చితంగా చెప్పలేను. స్పష్టమైన చిత్రాన్ని పంపగలరా?".to_string()),
            (Tamil, "உங்கள் பயிரில் {label} இருக்கலாம் என்று நினைக்கிறேன், ஆனால் முழுமையாக உறுதியாக இல்லை. தெளிவான படத்தை அனுப்ப முடியுமா?".to_string()),
            (Bengali, "আমার মনে হয় আপনার ফসলে {label} থাকতে পারে, কিন্তু আমি নিশ্চিত নই। আপনি কি একটি পরিষ্কার ছবি পাঠাতে পারেন?".to_string()),
        ]);

        let image_healthy = HashMap::from([
            (English, "Your crop looks healthy! Keep up the good work. If you have any specific concerns, feel free to ask.".to_string()),
            (Hindi, "आपकी फसल स्वस्थ दिखती है! अच्छा कार्य जारी रखें। यदि आपकी कोई विशिष्ट चिंता है, तो बेझिझक पूछें।".to_string()),
            (Punjabi, "ਤੁਹਾਡੀ ਫਸਲ ਸਿਹਤਮੰਦ ਲੱਗਦੀ ਹੈ! ਚੰਗਾ ਕੰਮ ਜਾਰੀ ਰੱਖੋ। ਜੇ ਤੁਹਾਡੀ ਕੋਈ ਖਾਸ ਚਿੰਤਾ ਹੈ, ਤਾਂ ਬੇਝਿੱਕ ਪੁੱਛੋ।".to_string()),
            (Telugu, "మీ పంట ఆరోగ్యంగా కనిపిస్తోంది! మంచి పనిని కొనసాగించండి. మీకు ఏవైనా నిర్దిష్ట ఆందోళనలు ఉంటే అడగండి.".to_string()),
            (Tamil, "உங்கள் பயிர் ஆரோக்கியமாகத் தெரிகிறது! நல்ல வேலையைத் தொடருங்கள். குறிப்பிட்ட கவலைகள் இருந்தால் கேளுங்கள்.".to_string()),
            (Bengali, "আপনার ফসল স্বাস্থ্যকর দেখাচ্ছে! ভালো কাজ চালিয়ে যান। কোনো নির্দিষ্ট উদ্বেগ থাকলে জিজ্ঞাসা করুন।".to_string()),
        ]);

        Self {
            keywords,
            templates,
            crop_vocabulary,
            pest_vocabulary,
            help,
            image_confident,
            image_uncertain,
            image_healthy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_intent_has_english_keywords_and_template() {
        let lexicon = Lexicon::default();
        for intent in Intent::ALL {
            assert!(
                !lexicon.keywords(intent, Language::English).is_empty(),
                "missing keywords for {intent}"
            );
            assert!(
                lexicon.template(intent, Language::English).is_some(),
                "missing template for {intent}"
            );
        }
    }

    #[test]
    fn test_missing_language_row_falls_back_to_english() {
        let mut lexicon = Lexicon::default();
        lexicon
            .keywords
            .get_mut(&Intent::Market)
            .unwrap()
            .remove(&Language::Tamil);

        let fallback = lexicon.keywords(Intent::Market, Language::Tamil);
        assert_eq!(fallback, lexicon.keywords(Intent::Market, Language::English));
    }

    #[test]
    fn test_vocabulary_order_is_preserved() {
        // The extractor takes the first match, so order is behavior.
        let lexicon = Lexicon::default();
        let crops = lexicon.vocabulary(EntityKind::Crop, Language::English);
        assert_eq!(crops[0], "wheat");
        assert_eq!(crops[4], "sugarcane");
    }

    #[test]
    fn test_help_is_always_available() {
        let lexicon = Lexicon::default();
        for lang in Language::ALL {
            assert!(!lexicon.help(lang).is_empty());
        }
    }
}
