use regex::Regex;

/// Matching rule for one canonical symptom tag: literal substrings, regular
/// expressions, and a looser related-keyword list used as a threshold gate.
#[derive(Debug, Clone)]
pub struct SymptomRule {
    pub tag: &'static str,
    pub literals: Vec<&'static str>,
    pub regexes: Vec<Regex>,
    pub related: Vec<&'static str>,
}

fn rule(
    tag: &'static str,
    literals: &[&'static str],
    regexes: &[&str],
    related: &[&'static str],
) -> SymptomRule {
    SymptomRule {
        tag,
        literals: literals.to_vec(),
        regexes: regexes
            .iter()
            .map(|p| Regex::new(p).expect("bundled symptom pattern"))
            .collect(),
        related: related.to_vec(),
    }
}

/// The bundled rule table. Declaration order is the order tags appear in the
/// extraction result.
pub fn bundled_rules() -> Vec<SymptomRule> {
    vec![
        rule(
            "두통",
            &[
                "머리", "두통", "두부", "헤드", "두개", "땅땅", "머리아픔", "두통이", "머리 아픔",
                "머리좀", "머리 아프다",
            ],
            &[r"머리\S*아프", r"두통\S*", r"머리.*아파", r"머리.*좀", r"머리.*안.*좋"],
            &["구역", "어지러", "현기", "시큼", "쑤시"],
        ),
        rule(
            "복통",
            &[
                "배", "복통", "복부", "가더", "배아파", "배 아파", "배가 아파", "배 좀",
                "배가 안좋", "복통이", "복통이 있어",
            ],
            &[r"배\S*아프", r"배\S*남", r"배가.*아프"],
            &["속", "명치", "구역", "메스", "아픔", "시큼"],
        ),
        rule(
            "소화불량",
            &[
                "소화", "트림", "더부", "가스", "팽만", "소화 안돼", "소화가 안돼", "소화 안되",
                "소화불량", "트림이", "더부룩",
            ],
            &[r"소화\S*안", r"소화\S*안돼"],
            &["배", "복부", "트림", "가스", "체함"],
        ),
        rule(
            "기침",
            &[
                "기침", "기케", "기캬", "가래", "기침나", "기침 나", "기침이 나", "기침나요",
                "기침이",
            ],
            &[r"기침\S*", r"기\S*기\S*"],
            &["가래", "헛기침", "목", "기관지", "인후"],
        ),
        rule(
            "근육통",
            &[
                "근육", "목아", "어깨", "허리", "등", "견관절", "목 아파", "목아파", "어깨 아파",
                "허리 아파", "등 아파", "뻐근", "뻣뻣",
            ],
            &[r"목\S*아", r"등\S*아"],
            &["촉", "뻐근", "뻣뻣", "통증", "시큼"],
        ),
        rule(
            "불면증",
            &[
                "불면", "잠안", "수면장애", "잠 안와", "잠이 안와", "잠 못자", "잠을 못자",
                "불면증",
            ],
            &[r"잠\S*안", r"잠.*못", r"수면.*안"],
            &["불면", "이면", "수면", "잠"],
        ),
        rule(
            "비염",
            &["콧물", "재채기", "코막", "비염", "코 막혀", "코막혀", "콧물이"],
            &[r"콧물\S*", r"코.*막"],
            &["콧", "코막", "코"],
        ),
        rule(
            "위산과다",
            &[
                "속쓰", "위산", "역류", "명치", "속 쓰림", "가슴 쓰림", "명치 쓰", "위산역류",
            ],
            &[r"속\S*쓰", r"가슴.*쓰"],
            &["속이", "가슴", "명치", "위"],
        ),
        rule(
            "메스꺼움",
            &["메스", "구토", "토할", "구역", "메스꺼워", "메스꺼움", "구역질", "토"],
            &[r"메스\S*", r"구토\S*"],
            &["토", "끼억", "역"],
        ),
        rule(
            "열",
            &["열", "발열", "체온", "온도", "열나", "열 나", "열이 나", "열감"],
            &[r"열\S*나", r"발열\S*"],
            &["뜨거", "열감", "온도", "체온"],
        ),
        rule(
            "치통",
            &[
                "치통", "이빨", "치아", "이가", "이 아", "이 아파", "잇몸", "잇몸 아파",
            ],
            &[r"이\S*아프", r"치\S*아파"],
            &["얼얼", "욱신", "땡김", "시림", "시려"],
        ),
    ]
}
