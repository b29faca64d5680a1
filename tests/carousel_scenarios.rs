// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_onboarding::config::Config;
use iced_onboarding::domain::onboarding::AnimationGroup;
use iced_onboarding::i18n::fluent::I18n;
use iced_onboarding::onboarding::{slides, Carousel, CarouselSettings, Effect, Generation, Trigger};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

fn english_carousel(settings: CarouselSettings) -> Carousel {
    let config = Config::default();
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    let deck = slides::default_deck(&i18n).expect("built-in deck is not empty");
    Carousel::new(deck, settings)
}

#[test]
fn timer_then_taps_run_to_completion() {
    let mut carousel = english_carousel(CarouselSettings::default());
    let titles: Vec<&str> = carousel.pages().slides().iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        ["Browse Menus", "Lightning Fast Delivery", "Real-Time Tracking"]
    );

    // Nine time units with a period of three: three ticks.
    let observed: Vec<usize> = (0..3)
        .map(|_| {
            carousel.on_timer_tick();
            carousel.current_page()
        })
        .collect();
    assert_eq!(observed, [1, 2, 0]);

    assert!(matches!(carousel.on_manual_advance(), Effect::Transitioned(t, _) if t.to == 1));
    assert!(matches!(carousel.on_manual_advance(), Effect::Transitioned(t, _) if t.to == 2));
    assert_eq!(carousel.on_manual_advance(), Effect::Complete);
    assert_eq!(carousel.current_page(), 2);
}

#[test]
fn every_trigger_hides_then_reveals() {
    let mut carousel = english_carousel(CarouselSettings::default());
    let now = Instant::now();
    let mount = carousel.mount();
    assert!(carousel.on_reveal_due(mount.generation, now));
    assert!(carousel.is_visible(AnimationGroup::ImageStack));

    for (effect, trigger) in [
        (carousel.on_timer_tick(), Trigger::Timer),
        (carousel.on_manual_advance(), Trigger::ManualAdvance),
        (carousel.on_direct_select(0), Trigger::Direct),
    ] {
        let Effect::Transitioned(transition, _) = effect else {
            panic!("expected a transition for {trigger:?}");
        };
        assert_eq!(transition.trigger, trigger);
    }

    // Only the latest transition's reveal can apply.
    assert!(!carousel.is_visible(AnimationGroup::Text));
    let latest = carousel.animation().generation();
    assert!(carousel.on_reveal_due(latest, now));
    assert!(carousel.is_visible(AnimationGroup::Text));
}

#[test]
fn progress_follows_configured_timings() {
    let mut carousel = english_carousel(CarouselSettings::default());
    let timings = carousel.settings().timings;
    let start = Instant::now();
    let mount = carousel.mount();
    carousel.on_reveal_due(mount.generation, start);

    assert_abs_diff_eq!(carousel.progress(AnimationGroup::Text, start), 0.0);
    let text_done = start + timings.text.total();
    assert_abs_diff_eq!(
        carousel.progress(AnimationGroup::Text, text_done),
        1.0,
        epsilon = 1e-6
    );
    let image_done = start + timings.image.total();
    assert_abs_diff_eq!(
        carousel.progress(AnimationGroup::ImageStack, image_done),
        1.0,
        epsilon = 1e-6
    );

    // The layered artwork keeps bouncing after its entrance.
    assert!(carousel.needs_frames(start + Duration::from_secs(30)));
}

/// Reveals are delivered by independent timers, as the application does.
/// Overlapping transitions must leave only the newest one visible.
#[tokio::test]
async fn overlapping_deferred_reveals_keep_only_the_latest() {
    let mut carousel = english_carousel(CarouselSettings::default());
    let (tx, mut rx) = mpsc::unbounded_channel::<Generation>();

    let deliver = |generation: Generation, delay: Duration| {
        let tx = tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(generation);
        });
    };

    let mount = carousel.mount();
    deliver(mount.generation, mount.delay);

    // Two quick taps before the first reveal fires.
    for _ in 0..2 {
        let Effect::Transitioned(_, reveal) = carousel.on_manual_advance() else {
            panic!("expected a transition");
        };
        deliver(reveal.generation, reveal.delay);
    }
    drop(tx);

    let mut applied = Vec::new();
    while let Some(generation) = rx.recv().await {
        if carousel.on_reveal_due(generation, Instant::now()) {
            applied.push(generation);
        }
    }

    assert_eq!(applied, [carousel.animation().generation()]);
    assert_eq!(carousel.current_page(), 2);
    assert!(carousel.is_visible(AnimationGroup::Text));
    assert!(carousel.is_visible(AnimationGroup::PageImage));
    assert_eq!(carousel.animation().pending(), None);
}

#[test]
fn restart_on_interaction_changes_timer_identity() {
    let mut carousel = english_carousel(CarouselSettings {
        restart_timer_on_interaction: true,
        ..CarouselSettings::default()
    });
    let before = carousel.timer_epoch();
    carousel.on_timer_tick();
    assert_eq!(carousel.timer_epoch(), before);
    carousel.on_direct_select(0);
    assert_ne!(carousel.timer_epoch(), before);
}
