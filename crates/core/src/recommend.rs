//! Random menu suggestions.

use rand::seq::SliceRandom;
use rand::Rng;

/// Static catalog of suggestable dishes. Grouping by cuisine is for readability only.
pub const RECOMMENDATIONS: &[&str] = &[
    // 한식
    "김치찌개", "된장찌개", "부대찌개", "갈비탕", "삼계탕", "순두부찌개", "청국장",
    "제육볶음", "불고기", "닭볶음탕", "찜닭", "갈비찜", "비빔밥", "콩나물국밥",
    "떡국", "설렁탕", "순대국밥", "감자탕",
    // 분식
    "떡볶이", "라면", "김밥", "쫄면", "순대", "튀김", "치즈돈까스", "핫도그",
    // 중식
    "짜장면", "짬뽕", "탕수육", "깐풍기", "유산슬", "마파두부", "중화비빔밥", "양꼬치",
    // 일식
    "초밥", "돈카츠", "가츠동", "오야코동", "라멘", "우동", "소바", "규동", "카레라이스",
    // 양식
    "스파게티", "알리오올리오", "까르보나라", "토마토파스타", "피자", "햄버거",
    "스테이크", "리조또", "오믈렛라이스", "프렌치토스트",
    // 기타
    "케밥", "부리또", "타코", "쌀국수", "커리", "팟타이", "필라프", "바비큐",
    "샌드위치", "핫도그", "치킨윙", "샐러드",
];

/// Picks one entry of [`RECOMMENDATIONS`] uniformly at random.
pub fn pick_recommendation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The catalog is a non-empty constant.
    RECOMMENDATIONS.choose(rng).copied().unwrap_or("김치찌개")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(RECOMMENDATIONS.len(), 65);
        assert!(RECOMMENDATIONS.iter().all(|name| !name.is_empty()));
    }

    #[test]
    fn test_pick_recommendation_covers_catalog_and_stays_inside_it() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog: HashSet<&str> = RECOMMENDATIONS.iter().copied().collect();
        let mut seen = HashSet::new();

        for _ in 0..5_000 {
            let pick = pick_recommendation(&mut rng);
            assert!(catalog.contains(pick), "unexpected pick {pick}");
            seen.insert(pick);
        }

        assert_eq!(seen, catalog);
    }

    #[test]
    fn test_pick_recommendation_with_thread_rng() {
        let pick = pick_recommendation(&mut rand::thread_rng());
        assert!(RECOMMENDATIONS.contains(&pick));
    }
}
