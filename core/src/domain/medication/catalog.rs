use crate::domain::medication::entities::{AgeNotes, Medication};

/// The bundled demo catalog. Ids are unique; declaration order is the
/// tie-break order used by the recommendation scorer.
#[derive(Debug, Clone)]
pub struct MedicationCatalog {
    medications: Vec<Medication>,
}

impl MedicationCatalog {
    pub fn bundled() -> Self {
        Self {
            medications: bundled_medications(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Medication> {
        self.medications.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Medication> {
        self.medications.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.medications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }
}

fn strs(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn ages(
    infant: &str,
    elderly: &str,
    infant_alternatives: &[&str],
    elderly_alternatives: &[&str],
) -> Option<AgeNotes> {
    Some(AgeNotes {
        infant: Some(infant.to_string()),
        elderly: Some(elderly.to_string()),
        infant_alternatives: strs(infant_alternatives),
        elderly_alternatives: strs(elderly_alternatives),
    })
}

fn bundled_medications() -> Vec<Medication> {
    vec![
        // 두통 관련
        Medication {
            id: "med_001".into(),
            name: "타이레놀정".into(),
            category: "진통제".into(),
            symptoms: strs(&["두통", "두통_경증", "열"]),
            ingredients: strs(&["아세트아미노펜"]),
            dosage: "성인 1회 1-2정, 1일 3-4회".into(),
            warnings: strs(&["과다복용 금지", "간질환 환자 주의"]),
            caution: Some("간 기능 이상 환자는 피하는 것이 좋습니다".into()),
            age_notes: ages(
                "유아(0-2세)는 체중에 따라 용량 조절 필요. 의사 처방 필수",
                "노년기(65세 이상)는 간 기능 저하 가능성 고려하여 용량 25% 감소 권장",
                &["med_001"],
                &["med_001"],
            ),
        },
        Medication {
            id: "med_002".into(),
            name: "부스코판정".into(),
            category: "진통제/소염제".into(),
            symptoms: strs(&["두통", "두통_중증", "생리통"]),
            ingredients: strs(&["부파레놀", "카페인"]),
            dosage: "성인 1회 1정, 1일 3회".into(),
            warnings: strs(&["위장 장애 환자 주의", "임신 초기 금지"]),
            caution: Some("위장이 약한 분은 식후 복용하세요".into()),
            age_notes: ages(
                "유아기(0-2세) 복용 금지. 카페인 성분으로 인해 신경계 자극 위험",
                "노년기(65세 이상)는 위장 장애 위험 증가, 고혈압 환자 주의 필요",
                &["med_001"],
                &["med_001"],
            ),
        },
        // 소화기관
        Medication {
            id: "med_003".into(),
            name: "가스모틴정".into(),
            category: "소화제".into(),
            symptoms: strs(&["소화불량", "복부팽만", "메스꺼움", "복통"]),
            ingredients: strs(&["모사프리드"]),
            dosage: "성인 1회 1정, 식전".into(),
            warnings: strs(&["어지러움 경향 주의"]),
            caution: Some("체질적으로 어지러움을 잘 느끼는 분은 주의".into()),
            age_notes: ages(
                "유아기(0-2세)는 어지러움 부작용 위험으로 복용 금지",
                "노년기(65세 이상)는 어지러움으로 인한 낙상 위험 증가, 용량 50% 감소 권장",
                &["med_008"],
                &["med_008"],
            ),
        },
        Medication {
            id: "med_009".into(),
            name: "불스피린정".into(),
            category: "진통제/소염제".into(),
            symptoms: strs(&["복통", "위통", "생리통"]),
            ingredients: strs(&["이부프로펜"]),
            dosage: "성인 1회 1정, 식후 복용".into(),
            warnings: strs(&["위장 장애 환자 주의", "관절염 환자 주의"]),
            caution: Some("위장이 약한 분은 식후 필수 복용".into()),
            age_notes: ages(
                "유아기(0-2세) 복용 금지. 위장 자극 및 신장 손상 위험",
                "노년기(65세 이상)는 위장 장애, 신장 기능 저하 위험 증가. 용량 50% 감소 필수",
                &["med_001"],
                &["med_001"],
            ),
        },
        Medication {
            id: "med_004".into(),
            name: "판콜에이내복액".into(),
            category: "감기약".into(),
            symptoms: strs(&["기침", "가래", "콧물"]),
            ingredients: strs(&["아세트아미노펜", "클로르페니라민", "덱스트로메토르판"]),
            dosage: "성인 1회 10ml, 1일 3회".into(),
            warnings: strs(&["운전금지", "수면유발"]),
            caution: Some("운전이 많으신 분은 피하는 것이 좋습니다".into()),
            age_notes: ages(
                "유아기(0-2세)는 클로르페니라민으로 인한 졸음 과다 위험, 복용량 25% 권장",
                "노년기(65세 이상)는 졸음 부작용 심화, 낙상 위험 증가로 용량 50% 감소 필요",
                &["med_001"],
                &["med_001"],
            ),
        },
        // 근육통
        Medication {
            id: "med_005".into(),
            name: "겔포스정".into(),
            category: "근육이완제".into(),
            symptoms: strs(&["근육통", "견관절통", "등허리통"]),
            ingredients: strs(&["클로르족사존"]),
            dosage: "성인 1회 1정, 1일 2-3회".into(),
            warnings: strs(&["졸음 경향", "운전금지"]),
            caution: Some("중추신경계 민감한 분은 주의".into()),
            age_notes: ages(
                "유아기(0-2세) 복용 금지. 졸음 부작용이 과도함",
                "노년기(65세 이상)는 졸음으로 인한 낙상 위험 매우 높음. 용량 50% 감소 필수",
                &["med_001"],
                &["med_001"],
            ),
        },
        // 수면
        Medication {
            id: "med_006".into(),
            name: "필로덤정".into(),
            category: "수면보조제".into(),
            symptoms: strs(&["불면증", "수면장애"]),
            ingredients: strs(&["트리아졸람"]),
            dosage: "성인 취침 전 1정".into(),
            warnings: strs(&["의존성 주의", "성격변화 주의"]),
            caution: Some("중추신경계 약한 분은 반복 복용 주의".into()),
            age_notes: ages(
                "유아기(0-2세) 절대 복용 금지",
                "노년기(65세 이상)는 기억력 저하, 낙상 위험 증가로 용량 50% 감소 필수",
                &[],
                &["med_017"],
            ),
        },
        // 비염
        Medication {
            id: "med_007".into(),
            name: "지르텍정".into(),
            category: "항히스타민제".into(),
            symptoms: strs(&["비염", "재채기", "눈가려움"]),
            ingredients: strs(&["세티리진"]),
            dosage: "성인 1회 1정, 1일 1회".into(),
            warnings: strs(&["졸음", "구강건조"]),
            caution: Some("운전 시 주의가 필요합니다".into()),
            age_notes: ages(
                "유아기(0-2세)는 용량 조절 필요. 의사 처방 필수",
                "노년기(65세 이상)는 신장 기능 저하 고려하여 용량 25% 감소 권장",
                &["med_007"],
                &["med_007"],
            ),
        },
        // 위산과다
        Medication {
            id: "med_008".into(),
            name: "제산제게일정".into(),
            category: "제산제".into(),
            symptoms: strs(&["속쓰림", "위산과다", "소화불량"]),
            ingredients: strs(&["알루미늄", "마그네슘"]),
            dosage: "성인 1회 1정, 필요시".into(),
            warnings: strs(&["변비 경향"]),
            caution: Some("변비가 있는 분은 사용 시 주의".into()),
            age_notes: ages(
                "유아기(0-2세)는 사용 가능하나 용량 조절 필요",
                "노년기(65세 이상)는 신장 기능 저하 시 알루미늄 축적 위험, 변비 주의 필요",
                &["med_008"],
                &["med_008"],
            ),
        },
        // 치통
        Medication {
            id: "med_010".into(),
            name: "오라나민정".into(),
            category: "진통제/소염제".into(),
            symptoms: strs(&["치통", "이빨", "이 아"]),
            ingredients: strs(&["아세트아미노펜", "이부프로펜"]),
            dosage: "성인 1회 1정, 식후".into(),
            warnings: strs(&["위장 장애 환자 주의"]),
            caution: Some("상처가 심한 경우 치과 방문 권장".into()),
            age_notes: ages(
                "유아기(0-2세) 복용 금지. 이부프로펜 성분으로 인한 위장/신장 위험",
                "노년기(65세 이상)는 위장 장애 위험 증가, 용량 50% 감소 필수",
                &["med_001"],
                &["med_001"],
            ),
        },
        // 발열/감기
        Medication {
            id: "med_011".into(),
            name: "판콜에이정".into(),
            category: "감기약".into(),
            symptoms: strs(&["감기", "콧물", "재채기", "발열"]),
            ingredients: strs(&["아세트아미노펜", "클로르페니라민"]),
            dosage: "성인 1회 2정, 1일 3-4회".into(),
            warnings: strs(&["운전금지", "졸음 유발"]),
            caution: Some("운전 전 복용 금지".into()),
            age_notes: ages(
                "유아기(0-2세)는 졸음 부작용 심화로 복용량 25% 권장",
                "노년기(65세 이상)는 졸음 부작용 심화, 낙상 위험 증가로 용량 50% 감소 필요",
                &["med_001"],
                &["med_001"],
            ),
        },
        Medication {
            id: "med_012".into(),
            name: "락트린정".into(),
            category: "소화제".into(),
            symptoms: strs(&["설사", "변", "복통"]),
            ingredients: strs(&["염산로페라마이드"]),
            dosage: "성인 1회 2정, 1일 3회".into(),
            warnings: strs(&["48시간 지속 시 병원 방문"]),
            caution: Some("만성 설사는 의사 상담 필요".into()),
            age_notes: ages(
                "유아기(0-2세) 복용 금지. 탈수 위험 증가",
                "노년기(65세 이상)는 변비 위험 증가, 용량 25% 감소 권장",
                &[],
                &["med_012"],
            ),
        },
        // 생리통
        Medication {
            id: "med_013".into(),
            name: "포비돈정".into(),
            category: "진통제".into(),
            symptoms: strs(&["생리통", "생리", "배 아", "복통"]),
            ingredients: strs(&["나프록센"]),
            dosage: "성인 1회 1정, 식후".into(),
            warnings: strs(&["위장 장애 환자 주의"]),
            caution: Some("생리 시작 시 미리 복용하는 것이 효과적".into()),
            age_notes: ages(
                "유아기(0-2세) 복용 금지. 위장 자극 및 신장 위험",
                "노년기(65세 이상)는 위장 장애, 신장 기능 저하 위험 증가. 용량 50% 감소 필수",
                &["med_001"],
                &["med_001"],
            ),
        },
        // 코막힘
        Medication {
            id: "med_014".into(),
            name: "프로스팬시럽".into(),
            category: "거담제".into(),
            symptoms: strs(&["가래", "기침", "기", "콧물"]),
            ingredients: strs(&["헤데라"]),
            dosage: "성인 1회 10ml, 1일 3회".into(),
            warnings: strs(&["과다복용 주의"]),
            caution: Some("가래 묽게 만들어주는 약".into()),
            age_notes: ages(
                "유아기(0-2세)는 시럽 형태로 복용 가능하나 용량 조절 필요",
                "노년기(65세 이상)는 당뇨 환자의 경우 당 함량 주의 필요",
                &["med_014"],
                &["med_014"],
            ),
        },
        // 변비
        Medication {
            id: "med_015".into(),
            name: "락투로즈정".into(),
            category: "변비제".into(),
            symptoms: strs(&["변비", "배변", "변 없"]),
            ingredients: strs(&["락툴로스"]),
            dosage: "성인 1회 1정, 식후".into(),
            warnings: strs(&["과다복용 주의"]),
            caution: Some("복용 후 수분 섭취 필요".into()),
            age_notes: ages(
                "유아기(0-2세)는 사용 가능하나 용량 조절 필요",
                "노년기(65세 이상)는 사용 가능하나 효과 지연 가능성",
                &["med_015"],
                &["med_015"],
            ),
        },
        // 어지러움
        Medication {
            id: "med_016".into(),
            name: "베타히스틴정".into(),
            category: "어지럼증 치료제".into(),
            symptoms: strs(&["어지러움", "현기", "멀미"]),
            ingredients: strs(&["베타히스틴"]),
            dosage: "성인 1회 1정, 1일 3회".into(),
            warnings: strs(&["과민반응 주의"]),
            caution: Some("멀미 방지에는 뇌관절방지약 권장".into()),
            age_notes: ages(
                "유아기(0-2세)는 용량 조절 필요, 의사 처방 필수",
                "노년기(65세 이상)는 신장 기능 저하 고려하여 용량 25% 감소 권장",
                &["med_016"],
                &["med_016"],
            ),
        },
        // 스트레스/우울
        Medication {
            id: "med_017".into(),
            name: "자로스정".into(),
            category: "진정제".into(),
            symptoms: strs(&["불안", "스트레스", "긴장"]),
            ingredients: strs(&["히드록시진"]),
            dosage: "성인 1회 1정, 필요시".into(),
            warnings: strs(&["졸음 유발", "운전금지"]),
            caution: Some("차량 운전 전 복용 금지".into()),
            age_notes: ages(
                "유아기(0-2세) 복용 금지. 졸음 부작용 위험",
                "노년기(65세 이상)는 졸음으로 인한 낙상 위험 증가, 용량 50% 감소 필수",
                &[],
                &["med_017"],
            ),
        },
        // 피부 가려움
        Medication {
            id: "med_018".into(),
            name: "레오틴크림".into(),
            category: "연고/크림".into(),
            symptoms: strs(&["가려움", "피부", "발진"]),
            ingredients: strs(&["덱사메타손"]),
            dosage: "연고 도포, 1일 2-3회".into(),
            warnings: strs(&["습포 시간 주의"]),
            caution: Some("피부가 약한 부위는 얇게 바르세요".into()),
            age_notes: None,
        },
        // 구내염
        Medication {
            id: "med_019".into(),
            name: "우리나스프레이".into(),
            category: "구강약".into(),
            symptoms: strs(&["구내염", "입 안", "입아"]),
            ingredients: strs(&["클로르헥시딘"]),
            dosage: "식후 한 번, 하루 3-4회".into(),
            warnings: strs(&["삼키지 마세요"]),
            caution: Some("영양분 섭취 부족 시 병원 방문".into()),
            age_notes: ages(
                "유아기(0-2세)는 삼킬 위험으로 사용 주의, 보호자 지도 필요",
                "노년기(65세 이상)는 사용 가능하며 안전",
                &["med_019"],
                &["med_019"],
            ),
        },
        // 위염
        Medication {
            id: "med_020".into(),
            name: "가스마시정".into(),
            category: "위장약".into(),
            symptoms: strs(&["위염", "위 아파", "위가아"]),
            ingredients: strs(&["스즈클로필레이트"]),
            dosage: "성인 1회 1정, 식전".into(),
            warnings: strs(&["가스 축적 주의"]),
            caution: Some("규칙적 식사가 중요합니다".into()),
            age_notes: ages(
                "유아기(0-2세)는 의사 처방 필요, 보호자 지도 하 사용",
                "노년기(65세 이상)는 사용 가능하며 안전",
                &["med_020"],
                &["med_020"],
            ),
        },
    ]
}
