use crate::{prompts::enums::platform::Platform, AppState};

use super::{enums::info_key::InfoKey, models::info_entry::InfoEntry};

const SUBJECT_INFO: &str =
    "그리려는 장면이나 인물/사물의 중심 키워드를 명확히 입력하세요. 예: ‘우주를 걷는 고양이’";
const ATTRIBUTE_INFO: &str =
    "이미지의 분위기, 색조, 질감 등을 묘사합니다. 예: ‘따뜻한 햇살 아래, 몽환적인 보라색 톤’";
const STYLE_INFO: &str =
    "원하는 표현 기법을 입력하세요. 예: ‘픽셀아트, 고흐풍, 디즈니 3D 애니’";
const COMPOSITION_INFO: &str = "정면, 측면, 클로즈업, 버스트샷, 탑뷰, 로우앵글 등";
const SETTING_INFO: &str = "시간/장소/조명 중심";

const GENERAL_INFO: &str = "1. 범용 프롬프트 작성에 최적화
2. 플랫폼 전용 플래그 없이도 모든 엔진(DALL·E, SD, MJ 등)에서 동작
3. 순서 유지: Subject → Attribute → Style → Composition → Setting → Emotion → ColorScheme → Negative → 공통 고급 옵션
4. 간결하게: 불필요한 쉼표·옵션 생략";

const MIDJOURNEY_INFO: &str = "1. **버전(--v)**과 **스타일(--style)**은 옵션 중 가장 앞에 배치
2. **Chaos(--chaos)**는 0–100 범위로 랜덤성 조절, 너무 높이면 결과 예측 어려움
3. **Image Weight(--iw)**는 레퍼런스 이미지 반영 강도, 0.1–2.0 권장
4. **Tile(--tile)**은 패턴 생성 전용, 반복 무늬가 필요할 때만 사용
5. **Stop(--stop)**은 10–100 사이로 지정, 낮게 설정할수록 러프한 초안 느낌
6. 공통 고급 옵션(--ar, --q, --seed, ::stylizeWeight)은 Midjourney 플래그 뒤에 추가

* 자세한 내용은 미드저니에 대해서 인터넷으로 찾아보세요.";

/// Help text for `key`. The platform entry depends on which platform is
/// selected; every other entry is fixed.
pub fn lookup(key: InfoKey, platform: Platform) -> InfoEntry {
    let (title, content) = match key {
        InfoKey::Platform => match platform {
            Platform::General => ("General 모드", GENERAL_INFO),
            Platform::Midjourney => ("Midjourney 모드", MIDJOURNEY_INFO),
        },
        InfoKey::Subject => ("대상", SUBJECT_INFO),
        InfoKey::Attribute => ("속성", ATTRIBUTE_INFO),
        InfoKey::Style => ("스타일", STYLE_INFO),
        InfoKey::Composition => ("구도", COMPOSITION_INFO),
        InfoKey::Setting => ("환경/배경", SETTING_INFO),
    };

    InfoEntry {
        key,
        title,
        content,
    }
}

pub async fn get_info(key: InfoKey, platform: Option<Platform>, state: &AppState) -> InfoEntry {
    let platform = match platform {
        Some(platform) => platform,
        None => state.session.read().await.form.platform,
    };

    lookup(key, platform)
}

pub async fn open_info(key: InfoKey, platform: Option<Platform>, state: &AppState) -> InfoEntry {
    let mut session = state.session.write().await;
    let platform = platform.unwrap_or(session.form.platform);

    tracing::debug!("opening info overlay for {}", key.value());

    session.overlay.open(lookup(key, platform)).clone()
}

pub async fn get_overlay(state: &AppState) -> Option<InfoEntry> {
    state.session.read().await.overlay.current().cloned()
}

pub async fn dismiss_overlay(state: &AppState) {
    let mut session = state.session.write().await;

    if let Some(entry) = session.overlay.dismiss() {
        tracing::debug!("dismissed info overlay for {}", entry.key.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_util::test_state;

    #[test]
    fn test_platform_entry_follows_platform() {
        let general = lookup(InfoKey::Platform, Platform::General);
        let midjourney = lookup(InfoKey::Platform, Platform::Midjourney);

        assert_eq!(general.title, "General 모드");
        assert_eq!(midjourney.title, "Midjourney 모드");
        assert!(midjourney.content.contains("--chaos"));
    }

    #[test]
    fn test_field_entries_ignore_platform() {
        assert_eq!(
            lookup(InfoKey::Subject, Platform::General),
            lookup(InfoKey::Subject, Platform::Midjourney)
        );
        assert_eq!(lookup(InfoKey::Composition, Platform::General).title, "구도");
    }

    #[tokio::test]
    async fn test_open_uses_session_platform() {
        let (state, _, _) = test_state();
        state.session.write().await.form.platform = Platform::Midjourney;

        let entry = open_info(InfoKey::Platform, None, &state).await;

        assert_eq!(entry.title, "Midjourney 모드");
        assert_eq!(get_overlay(&state).await, Some(entry));
    }

    #[tokio::test]
    async fn test_dismiss_closes_overlay() {
        let (state, _, _) = test_state();
        open_info(InfoKey::Style, None, &state).await;

        dismiss_overlay(&state).await;

        assert_eq!(get_overlay(&state).await, None);
    }
}
