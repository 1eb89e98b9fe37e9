//! Coarse region labeling from a POI's name/address, used only for the
//! region-visit-count soft constraint that drives novelty tension and the
//! counter-suggestion explanation rule.

const REGION_KEYWORDS: &[(&str, &[&str])] = &[
    ("Gusu", &["苏州博物馆", "拙政园", "平江路", "姑苏", "园林"]),
    ("Huqiu", &["虎丘", "山塘街"]),
    ("Jinji Lake", &["金鸡湖"]),
    ("Gulangyu", &["鼓浪屿"]),
    ("Xiamen University", &["厦大", "厦门大学"]),
    ("Zengcuoan", &["曾厝垵"]),
    ("Zhongshan Road", &["中山路"]),
    ("Huandao Road", &["环岛路"]),
];

/// Famous-landmark name tokens that bump the continuity tension and the
/// quality filter's `history` sub-score, independent of region matching.
pub const LANDMARK_TOKENS: &[&str] = &[
    "厦大", "鼓浪屿", "环岛路", "曾厝垵", "中山路", "苏州博物馆", "拙政园", "虎丘", "平江路",
];

pub fn region_of(name: &str, address: &str) -> String {
    for (region, keywords) in REGION_KEYWORDS {
        if keywords.iter().any(|k| name.contains(k) || address.contains(k)) {
            return region.to_string();
        }
    }
    "other".to_string()
}
