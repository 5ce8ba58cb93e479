use rand::seq::SliceRandom;

use crate::domain::{
    chat::entities::ComposedReply,
    medication::{catalog::MedicationCatalog, entities::Medication},
    recommendation::{entities::Recommendation, scorer::RecommendationScorer},
    symptom::extractor::SymptomExtractor,
    user::{
        entities::{MedicationResult, UserProfile},
        services::analyze_body_type,
    },
};

const GREETING: &str = "안녕하세요! 약장수 챗봇입니다. 어떤 증상으로 불편하신가요?";
const LOGIN_HELP: &str = "로그인은 상단의 로그인 버튼을 클릭해주세요.";
const THANKS: &str = "천만에요! 언제든지 불편한 증상이 있으면 말씀해주세요.\n\n건강하세요! 💚";
const REFUSAL_ACK: &str = "알겠습니다. 필요하실 때 언제든지 말씀해주세요!";
const HELP_TEXT: &str = "안녕하세요! 약장수 챗봇입니다.\n\n저는 증상에 맞는 약을 추천해드리는 챗봇입니다. 예를 들어:\n\n• '머리가 아파요' → 두통 약 추천\n• '소화가 안 돼요' → 소화제 추천\n• '기침이 나요' → 기침약 추천\n\n어떤 증상으로 불편하신지 알려주시면 적합한 약을 추천해드리겠습니다! 😊";

const CASUAL_RESPONSES: [&str; 4] = [
    "안녕하세요! 약장수 챗봇입니다. 어떤 증상으로 불편하신가요?",
    "네, 말씀해주세요! 증상을 알려주시면 적합한 약을 추천해드리겠습니다.",
    "무엇을 도와드릴까요? 증상을 설명해주시면 약을 추천해드릴 수 있습니다.",
    "어떤 증상이 있으신가요? 예를 들어 '머리가 아파요', '소화가 안 돼요' 같은 식으로 설명해주시면 도움을 드릴 수 있습니다.",
];

const QUESTION_MARKERS: [&str; 8] = ["?", "뭐", "무엇", "어떤", "어떻게", "언제", "왜", "어디"];
const GRATITUDE_KEYWORDS: [&str; 5] = ["감사", "고마", "좋", "도움", "고맙"];
const REFUSAL_KEYWORDS: [&str; 3] = ["그만", "안", "싫"];
const EYE_DISCOMFORT: [&str; 6] = ["아파", "따갑", "피곤", "건조", "충혈", "이물감"];

const HEAVY_RULE: &str = "\n\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const LIGHT_RULE: &str = "\n\n────────────────────────────";

/// Assembles the persona-styled reply: canned conversational branches first,
/// then the extractor/scorer pipeline rendered through the reply template.
/// The whole reply is determined before any streaming starts.
#[derive(Debug, Clone)]
pub struct MedicationResponder {
    extractor: SymptomExtractor,
    scorer: RecommendationScorer,
}

impl MedicationResponder {
    pub fn bundled() -> Self {
        Self {
            extractor: SymptomExtractor::bundled(),
            scorer: RecommendationScorer::new(MedicationCatalog::bundled()),
        }
    }

    pub fn catalog(&self) -> &MedicationCatalog {
        self.scorer.catalog()
    }

    pub fn respond(&self, user_message: &str, profile: Option<&UserProfile>) -> ComposedReply {
        let lower = user_message.to_lowercase();

        // Canned branches win over extraction, in this order.
        if lower.contains("안녕") || lower.contains("hello") || lower.contains("hi") {
            return canned(GREETING);
        }
        if lower.contains("로그인") || lower.contains("로그아웃") {
            return canned(LOGIN_HELP);
        }
        if user_message.contains("눈")
            && EYE_DISCOMFORT.iter().any(|kw| user_message.contains(kw))
        {
            return canned(&eye_care_reply());
        }

        let symptoms = self.extractor.extract(user_message);
        if symptoms.is_empty() {
            return canned(&self.no_symptom_reply(user_message));
        }

        let recommendations = self.scorer.recommend(&symptoms, profile);
        let recommended_medications: Vec<String> = recommendations
            .iter()
            .map(|r| r.medication.name.clone())
            .collect();
        let text = self.render_recommendations(user_message, &symptoms, &recommendations, profile);

        ComposedReply {
            text,
            symptoms,
            recommended_medications,
        }
    }

    fn no_symptom_reply(&self, user_message: &str) -> String {
        if QUESTION_MARKERS.iter().any(|kw| user_message.contains(kw)) {
            return HELP_TEXT.to_string();
        }
        if GRATITUDE_KEYWORDS.iter().any(|kw| user_message.contains(kw)) {
            return THANKS.to_string();
        }
        if REFUSAL_KEYWORDS.iter().any(|kw| user_message.contains(kw)) {
            return REFUSAL_ACK.to_string();
        }
        CASUAL_RESPONSES
            .choose(&mut rand::thread_rng())
            .unwrap_or(&CASUAL_RESPONSES[0])
            .to_string()
    }

    fn render_recommendations(
        &self,
        user_message: &str,
        symptoms: &[String],
        recommendations: &[Recommendation],
        profile: Option<&UserProfile>,
    ) -> String {
        let mut out = String::new();
        out.push_str(&format!("증상을 확인했습니다: {}", symptoms.join(", ")));

        let situation = analyze_situation(user_message);
        if !situation.is_empty() {
            out.push_str(&format!("\n상황 분석: {situation}"));
        }

        if recommendations.is_empty() {
            out.push_str("\n해당 증상에 적합한 약을 찾지 못했습니다.");
            out.push_str("\n💡 더 자세한 증상을 알려주시거나 병원을 방문하는 것을 권장합니다.");
        } else {
            out.push_str(HEAVY_RULE);
            out.push_str(&format!("\n📋 추천 약물 ({}개)", recommendations.len()));
            out.push_str(HEAVY_RULE);

            for (idx, rec) in recommendations.iter().enumerate() {
                let med = &rec.medication;
                out.push_str(&format!("\n\n{}. {}", idx + 1, med.name));
                out.push_str(&format!("   [ {} ]", med.category));

                out.push_str("\n   📌 치료 증상");
                out.push_str(&format!("   {}", med.symptoms.join(", ")));

                out.push_str("\n   💊 용법");
                out.push_str(&format!("   {}", med.dosage));

                let advice = custom_dosage_advice(med, user_message, profile);
                if !advice.is_empty() {
                    out.push_str("\n   ⏰ 상황별 추천");
                    if advice.chars().count() > 40 {
                        for part in advice.split(" | ") {
                            out.push_str(&format!("   {part}"));
                        }
                    } else {
                        out.push_str(&format!("   {advice}"));
                    }
                }

                let mut warnings = rec.all_warnings().peekable();
                if warnings.peek().is_some() {
                    out.push_str("\n   ⚠️ 주의사항");
                    for warning in warnings {
                        out.push_str(&format!("   {warning}"));
                    }
                }

                if let (Some(caution), Some(_)) = (&med.caution, profile) {
                    out.push_str("\n   🔔 맞춤 주의");
                    out.push_str(&format!("   {caution}"));
                }

                if let Some(profile) = profile {
                    self.render_age_notes(&mut out, med, profile);
                }

                if idx < recommendations.len() - 1 {
                    out.push_str(LIGHT_RULE);
                }
            }

            out.push_str(HEAVY_RULE);
            out.push_str("\n📝 참고사항\n");
            out.push_str("   위 내용은 참고용이며, 복용 전 의사나 약사와 상담하시기 바랍니다.");

            if symptoms
                .iter()
                .any(|s| s.contains("근육") || s.contains("가슴"))
            {
                out.push_str("\n   🚨 응급 증상 시 즉시 병원을 방문하세요.");
            }
        }

        if let Some(profile) = profile
            && let Some(top) = recommendations.first()
        {
            let body_type = analyze_body_type(profile);
            out.push_str(&format!(
                "\n{}님의 체질({})을 고려한 맞춤 추천:",
                profile.username, body_type
            ));
            out.push_str(&format!(
                "→ {}이(가) 가장 적합해 보입니다.",
                top.medication.name
            ));
        }

        out
    }

    fn render_age_notes(&self, out: &mut String, med: &Medication, profile: &UserProfile) {
        let Some(age) = profile.age else { return };
        let Some(notes) = &med.age_notes else { return };

        let (icon, note, alternatives) = if age <= 2 {
            ("👶", notes.infant.as_ref(), &notes.infant_alternatives)
        } else if age >= 65 {
            ("🧓", notes.elderly.as_ref(), &notes.elderly_alternatives)
        } else {
            return;
        };
        let Some(note) = note else { return };

        out.push_str(&format!("\n   {icon} 연령 주의"));
        out.push_str(&format!("   {note}"));

        let alternative_names: Vec<&str> = alternatives
            .iter()
            .filter(|id| id.as_str() != med.id)
            .filter_map(|id| self.catalog().get(id).map(|m| m.name.as_str()))
            .collect();
        if !alternative_names.is_empty() {
            out.push_str(&format!("   대체 권장: {}", alternative_names.join(", ")));
        }
    }
}

fn canned(text: &str) -> ComposedReply {
    ComposedReply {
        text: text.to_string(),
        symptoms: Vec::new(),
        recommended_medications: Vec::new(),
    }
}

fn eye_care_reply() -> String {
    let tips = [
        "화면 사용 줄이고 20-20-20 규칙 실천",
        "인공눈물(보존제 무첨가) 1일 3-4회 점안",
        "냉찜질로 눈 피로 완화",
        "콘택트렌즈 일시 중단",
    ];
    let red_flags = [
        "시력 저하",
        "강한 통증",
        "심한 충혈 2일 이상",
        "눈부심/시야장애",
        "외상 후 통증",
    ];
    format!(
        "눈 통증/불편감에 대한 안내입니다.\n\n권장 조치:\n- {}\n\n다음 증상 중 하나라도 있으면 즉시 안과 방문 권장:\n- {}",
        tips.join("\n- "),
        red_flags.join("\n- ")
    )
}

/// Keyword-driven situation annotation; independent clauses OR'd together
/// and comma-joined.
fn analyze_situation(text: &str) -> String {
    let mut situations: Vec<&str> = Vec::new();

    if text.contains("공복") {
        situations.push("공복 상태");
    }
    if text.contains("운전") {
        situations.push("운전 중/운전 예정");
    }
    if text.contains("밥") && text.contains("안") {
        situations.push("식사하지 않음");
    }
    if text.contains("밤") || text.contains("저녁") {
        situations.push("저녁/밤 시간");
    }
    if text.contains("아침") {
        situations.push("아침 시간");
    }
    if text.contains("피곤") {
        situations.push("피로 상태");
    }

    situations.join(", ")
}

/// Situational dosing advice per medication, joined with " | ".
fn custom_dosage_advice(
    med: &Medication,
    user_message: &str,
    profile: Option<&UserProfile>,
) -> String {
    let mut advice: Vec<&str> = Vec::new();

    if user_message.contains("공복") && (med.name == "타이레놀정" || med.name == "부스코판정") {
        advice.push("식후 30분 복용 권장 (공복에는 위장 자극 가능)");
    }

    if user_message.contains("운전") {
        if med.name == "부스코판정" || med.name.contains("카페인") {
            advice.push("운전 전 복용 자제, 졸음 유발 가능");
        } else if med.name == "타이레놀정" {
            advice.push("복용 후 운전 가능");
        }
    }

    if (user_message.contains("메스꺼워") || user_message.contains("속이"))
        && med.category == "진통제"
    {
        advice.push("증상 호전 전까지 우선 복용, 지속 시 병원 방문");
    }

    if let Some(profile) = profile {
        if profile.chronic_conditions.iter().any(|c| c == "간") && med.name == "타이레놀정" {
            advice.push("간 기능 검사 후 복용 권장");
        }
        if profile
            .medication_history
            .iter()
            .any(|h| h.medication_id == med.id && h.result == MedicationResult::Negative)
        {
            advice.push("과거 부작용 경험 있음, 주의 복용");
        }
    }

    if ["치통", "이빨", "치아", "잇몸"]
        .iter()
        .any(|kw| user_message.contains(kw))
        && med.category.contains("진통")
    {
        advice.push("뜨겁거나 찬 음식 피하기, 가글은 미지근한 소금물 권장");
        advice.push("얼굴 붓기/발열/고름 시 즉시 치과 방문");
    }

    advice.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> MedicationResponder {
        MedicationResponder::bundled()
    }

    #[test]
    fn greeting_short_circuits_even_with_symptom_text() {
        let reply = responder().respond("안녕하세요 머리가 아파요", None);
        assert_eq!(reply.text, GREETING);
        assert!(reply.symptoms.is_empty());
    }

    #[test]
    fn login_keywords_get_instructions() {
        let reply = responder().respond("로그인 어떻게 해요", None);
        assert_eq!(reply.text, LOGIN_HELP);
    }

    #[test]
    fn eye_compound_condition_bypasses_pipeline() {
        let reply = responder().respond("눈이 따갑고 건조해요", None);
        assert!(reply.text.contains("권장 조치"));
        assert!(reply.text.contains("즉시 안과 방문 권장"));
        assert!(reply.recommended_medications.is_empty());
    }

    #[test]
    fn question_without_symptoms_gets_help_text() {
        let reply = responder().respond("무엇을 도와주실 수 있나요?", None);
        assert_eq!(reply.text, HELP_TEXT);
    }

    #[test]
    fn gratitude_gets_thanks() {
        let reply = responder().respond("감사합니다", None);
        assert_eq!(reply.text, THANKS);
    }

    #[test]
    fn refusal_gets_acknowledgment() {
        let reply = responder().respond("그만할래", None);
        assert_eq!(reply.text, REFUSAL_ACK);
    }

    #[test]
    fn headache_renders_recommendation_block() {
        let reply = responder().respond("두통이 있어요", None);
        assert_eq!(reply.symptoms, vec!["두통".to_string()]);
        assert!(reply.text.contains("증상을 확인했습니다: 두통"));
        assert!(reply.text.contains("📋 추천 약물 (2개)"));
        assert!(reply.text.contains("타이레놀정"));
        assert!(reply.text.contains("부스코판정"));
        assert!(reply.text.contains("위 내용은 참고용이며"));
        assert_eq!(
            reply.recommended_medications,
            vec!["타이레놀정".to_string(), "부스코판정".to_string()]
        );
    }

    #[test]
    fn warning_header_is_skipped_when_there_is_nothing_to_warn_about() {
        let rec = Recommendation {
            medication: Medication {
                id: "med_x".to_string(),
                name: "테스트정".to_string(),
                category: "해열진통제".to_string(),
                symptoms: vec!["두통".to_string()],
                ingredients: vec!["성분A".to_string()],
                dosage: "1일 1회 1정".to_string(),
                warnings: vec![],
                caution: None,
                age_notes: None,
            },
            score: 100,
            extra_warnings: vec![],
        };
        let text = responder().render_recommendations(
            "두통이 있어요",
            &["두통".to_string()],
            std::slice::from_ref(&rec),
            None,
        );
        assert!(!text.contains("⚠️ 주의사항"));
        assert!(text.contains("💊 용법"));
    }

    #[test]
    fn situation_annotation_and_dosing_advice() {
        let reply = responder().respond("공복인데 머리가 아파요", None);
        assert!(reply.text.contains("상황 분석: 공복 상태"));
        assert!(reply.text.contains("식후 30분 복용 권장"));
    }

    #[test]
    fn muscle_pain_adds_emergency_line() {
        let reply = responder().respond("어깨가 아파요", None);
        assert!(reply.symptoms.contains(&"근육통".to_string()));
        assert!(reply.text.contains("🚨 응급 증상 시 즉시 병원을 방문하세요."));
    }

    #[test]
    fn allergy_wiping_out_matches_renders_fallback() {
        let mut profile = UserProfile::new("u1", "김민수");
        profile.allergies = vec!["트리아졸람".to_string()];
        let reply = responder().respond("불면증이 심해요", Some(&profile));
        assert!(reply.text.contains("해당 증상에 적합한 약을 찾지 못했습니다."));
        assert!(reply.text.contains("병원을 방문하는 것을 권장합니다"));
        assert!(reply.recommended_medications.is_empty());
    }

    #[test]
    fn profile_adds_body_type_closing() {
        let mut profile = UserProfile::new("user001", "홍길동");
        profile.body_type = Some("평상형".to_string());
        let reply = responder().respond("두통이 있어요", Some(&profile));
        assert!(reply.text.contains("홍길동님의 체질(평상형)을 고려한 맞춤 추천:"));
        assert!(reply.text.contains("타이레놀정이(가) 가장 적합해 보입니다."));
    }

    #[test]
    fn elderly_profile_gets_age_notes() {
        let mut profile = UserProfile::new("user003", "이영희");
        profile.age = Some(65);
        let reply = responder().respond("두통이 있어요", Some(&profile));
        assert!(reply.text.contains("🧓 연령 주의"));
        assert!(reply.text.contains("노년기(65세 이상)"));
    }

    #[test]
    fn infant_profile_gets_alternatives() {
        let mut profile = UserProfile::new("u1", "아기");
        profile.age = Some(1);
        let reply = responder().respond("두통이 있어요", Some(&profile));
        assert!(reply.text.contains("👶 연령 주의"));
        // med_002 recommends 타이레놀정 as the infant alternative.
        assert!(reply.text.contains("대체 권장: 타이레놀정"));
    }
}
