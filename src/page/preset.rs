//! The built-in page: hero, letter/podcast cards, message, gallery, playlist, closing note.

use crate::{
    animation::{
        ease::Ease,
        looping::{LoopAnimation, LoopTrack},
        tween::{Property, Tween, VisualProps},
    },
    foundation::core::{Millis, Rect},
    page::config::{
        ElementConfig, GalleryLayout, HeroConfig, OutboundLink, PageConfig, SectionConfig,
        ViewportSize,
    },
    reveal::scheduler::RevealTrigger,
};

const WIDTH: f64 = 1280.0;
const SECTION: f64 = 800.0;

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hero: HeroConfig::default(),
            manifest: "/data/gallery.json".to_owned(),
            assets_root: "/assets/".to_owned(),
            viewport: ViewportSize::default(),
            sections: vec![
                hero_section(),
                letter_podcast_section(),
                message_section(),
                gallery_section(),
                playlist_section(),
                closing_section(),
            ],
            gallery: GalleryLayout::default(),
            next_section: "letter-podcast".to_owned(),
            links: vec![
                OutboundLink {
                    key: "letter".to_owned(),
                    label: "Read the letter".to_owned(),
                    href: "https://justinjnr.medium.com/happy-25th-jesulayomi-af52d62c8558"
                        .to_owned(),
                },
                OutboundLink {
                    key: "podcast".to_owned(),
                    label: "Listen to the episode".to_owned(),
                    href: "https://open.spotify.com/episode/6JIP4drtIYK8OOAqkkpJnn".to_owned(),
                },
                OutboundLink {
                    key: "playlist".to_owned(),
                    label: "Listen on Spotify".to_owned(),
                    href: "https://open.spotify.com/playlist/4YNRrIe5zpzdcKGcwKBb7e".to_owned(),
                },
            ],
        }
    }
}

fn band(index: u32) -> Rect {
    let top = f64::from(index) * SECTION;
    Rect::new(0.0, top, WIDTH, top + SECTION)
}

fn boxed(section: u32, x: f64, y: f64, w: f64, h: f64) -> Rect {
    let top = f64::from(section) * SECTION;
    Rect::new(x, top + y, x + w, top + y + h)
}

fn from() -> VisualProps {
    VisualProps::hidden()
}

/// Hidden, pushed down by `y` and shrunk to `scale`.
fn lifted(y: f64, scale: f64) -> VisualProps {
    from().with(Property::Y, y).with(Property::Scale, scale)
}

fn enter(from: VisualProps, duration: u64, delay: u64, ease: Ease) -> Tween {
    Tween {
        from,
        to: VisualProps::IDENTITY,
        duration: Millis(duration),
        delay: Millis(delay),
        ease,
    }
}

fn element(key: &str, bounds: Rect, trigger: RevealTrigger, enter: Tween) -> ElementConfig {
    ElementConfig {
        key: key.to_owned(),
        bounds,
        trigger,
        enter,
        looping: None,
    }
}

fn in_view(margin_px: f64) -> RevealTrigger {
    RevealTrigger::InView { margin_px }
}

fn hero_section() -> SectionConfig {
    let m = RevealTrigger::Mount;
    SectionConfig {
        id: "hero".to_owned(),
        bounds: band(0),
        elements: vec![
            element(
                "hero-content",
                boxed(0, 240.0, 200.0, 800.0, 400.0),
                m,
                enter(from(), 800, 0, Ease::EaseOut),
            ),
            element(
                "hero-title",
                boxed(0, 240.0, 220.0, 800.0, 120.0),
                m,
                enter(lifted(50.0, 0.9), 1000, 300, Ease::SMOOTH),
            ),
            element(
                "hero-subtitle",
                boxed(0, 240.0, 360.0, 800.0, 60.0),
                m,
                enter(from().with(Property::Y, 30.0), 800, 600, Ease::EaseOut),
            ),
            element(
                "hero-scroll-button",
                boxed(0, 560.0, 460.0, 160.0, 56.0),
                m,
                enter(lifted(20.0, 0.9), 600, 900, Ease::EaseOut),
            ),
        ],
    }
}

fn card(prefix: &str, x: f64, dir: f64, delay: u64) -> Vec<ElementConfig> {
    let s = 1;
    let slide_in = from()
        .with(Property::X, 100.0 * dir)
        .with(Property::Scale, 0.9);
    let tilt = from().with(Property::RotateDeg, 10.0 * dir);
    vec![
        element(
            &format!("{prefix}-card"),
            boxed(s, x, 100.0, 560.0, 600.0),
            in_view(-100.0),
            enter(slide_in, 800, delay, Ease::SMOOTH),
        ),
        element(
            &format!("{prefix}-icon"),
            boxed(s, x + 230.0, 140.0, 100.0, 100.0),
            in_view(0.0),
            enter(tilt, 800, delay + 500, Ease::EaseOut),
        ),
        element(
            &format!("{prefix}-title"),
            boxed(s, x + 40.0, 280.0, 480.0, 60.0),
            in_view(-50.0),
            enter(from().with(Property::X, 50.0 * dir), 600, 0, Ease::EaseOut),
        ),
        element(
            &format!("{prefix}-text"),
            boxed(s, x + 40.0, 360.0, 480.0, 160.0),
            in_view(-50.0),
            enter(from().with(Property::Y, 20.0), 600, 200, Ease::EaseOut),
        ),
        element(
            &format!("{prefix}-link"),
            boxed(s, x + 160.0, 560.0, 240.0, 56.0),
            in_view(-50.0),
            enter(from().with(Property::Y, 20.0), 600, 400, Ease::EaseOut),
        ),
    ]
}

fn letter_podcast_section() -> SectionConfig {
    let mut elements = card("letter", 60.0, -1.0, 0);
    elements.extend(card("podcast", 660.0, 1.0, 200));
    SectionConfig {
        id: "letter-podcast".to_owned(),
        bounds: band(1),
        elements,
    }
}

fn message_section() -> SectionConfig {
    let mut elements = vec![element(
        "message",
        boxed(2, 240.0, 150.0, 800.0, 500.0),
        in_view(-100.0),
        enter(from(), 800, 0, Ease::EaseOut),
    )];
    for (i, delay) in [0u64, 200, 400].into_iter().enumerate() {
        elements.push(element(
            &format!("message-line-{}", i + 1),
            boxed(2, 240.0, 180.0 + 150.0 * i as f64, 800.0, 120.0),
            in_view(-50.0),
            enter(lifted(30.0, 0.95), 800, delay, Ease::SMOOTH),
        ));
    }
    SectionConfig {
        id: "message".to_owned(),
        bounds: band(2),
        elements,
    }
}

fn gallery_section() -> SectionConfig {
    SectionConfig {
        id: "gallery".to_owned(),
        // Two bands tall; the grid grows into the second.
        bounds: Rect::new(0.0, 3.0 * SECTION, WIDTH, 5.0 * SECTION),
        elements: vec![element(
            "gallery-title",
            boxed(3, 240.0, 60.0, 800.0, 100.0),
            in_view(-50.0),
            enter(lifted(50.0, 0.9), 800, 0, Ease::SMOOTH),
        )],
    }
}

/// Decorative element: pops in once (keeping its resting tilt) and floats forever.
fn floating(
    key: &str,
    bounds: Rect,
    tilt: f64,
    enter_delay: u64,
    tracks: Vec<LoopTrack>,
    loop_delay: u64,
) -> ElementConfig {
    let rest = VisualProps::IDENTITY.with(Property::RotateDeg, tilt);
    ElementConfig {
        key: key.to_owned(),
        bounds,
        trigger: in_view(0.0),
        enter: Tween {
            from: VisualProps {
                opacity: 0.0,
                scale: 0.0,
                ..rest
            },
            to: rest,
            duration: Millis(800),
            delay: Millis(enter_delay),
            ease: Ease::EaseOut,
        },
        looping: Some(LoopAnimation::new(tracks).with_delay(Millis(loop_delay))),
    }
}

fn track(property: Property, keys: &[f64], period: u64) -> LoopTrack {
    LoopTrack::new(property, keys.to_vec(), Millis(period))
}

fn playlist_section() -> SectionConfig {
    // (key, x, y, tilt, enter delay, y swing, tilt swing, period, loop delay)
    let songs: [(&str, f64, f64, f64, u64, f64, f64, u64, u64); 7] = [
        ("song-believe-me", 32.0, 80.0, -15.0, 600, -10.0, -20.0, 4000, 0),
        ("song-i-go-nowhere", 1040.0, 128.0, 12.0, 800, 8.0, 18.0, 3500, 300),
        ("song-now-and-always", 64.0, 640.0, -8.0, 1000, -12.0, -15.0, 3800, 500),
        ("song-smile-for-me", 1000.0, 680.0, 20.0, 1200, 10.0, 25.0, 3200, 700),
        ("song-forever-baby", 320.0, 266.0, -10.0, 700, -8.0, -15.0, 4200, 400),
        ("song-count-on-you", 800.0, 520.0, 15.0, 900, 8.0, 22.0, 3600, 600),
        ("song-perfect-for-you", 426.0, 200.0, -18.0, 1100, -15.0, -25.0, 4000, 800),
    ];

    let mut elements: Vec<ElementConfig> = songs
        .iter()
        .map(|&(key, x, y, tilt, delay, dy, swing, period, loop_delay)| {
            floating(
                key,
                boxed(5, x, y, 200.0, 32.0),
                tilt,
                delay,
                vec![
                    track(Property::Y, &[0.0, dy, 0.0], period),
                    track(Property::RotateDeg, &[tilt, swing, tilt], period),
                ],
                loop_delay,
            )
        })
        .collect();

    elements.extend([
        element(
            "playlist-card",
            boxed(5, 256.0, 250.0, 768.0, 300.0),
            in_view(-100.0),
            enter(lifted(50.0, 0.9), 800, 0, Ease::SMOOTH),
        ),
        element(
            "playlist-title",
            boxed(5, 256.0, 270.0, 768.0, 120.0),
            in_view(-50.0),
            enter(from().with(Property::Y, 30.0), 800, 200, Ease::EaseOut),
        ),
        element(
            "playlist-link",
            boxed(5, 500.0, 430.0, 280.0, 64.0),
            in_view(-50.0),
            enter(from().with(Property::Y, 30.0), 800, 400, Ease::EaseOut),
        ),
    ]);

    SectionConfig {
        id: "playlist".to_owned(),
        bounds: band(5),
        elements,
    }
}

fn closing_section() -> SectionConfig {
    let s = 6;
    let r = |keys: &[f64], period| track(Property::RotateDeg, keys, period);
    let y = |keys: &[f64], period| track(Property::Y, keys, period);
    let k = |keys: &[f64], period| track(Property::Scale, keys, period);
    // Decorations rest upright, so only the tilt swing is animated.
    let icon = |key: &str, bounds: Rect, enter_delay: u64, tracks, loop_delay: u64| {
        floating(key, bounds, 0.0, enter_delay, tracks, loop_delay)
    };

    let mut elements = vec![
        icon(
            "icon-cake",
            boxed(s, 40.0, 80.0, 64.0, 64.0),
            200,
            vec![
                r(&[0.0, 10.0, -10.0, 0.0], 3000),
                y(&[0.0, -10.0, 0.0], 3000),
            ],
            0,
        ),
        icon(
            "icon-hearts",
            boxed(s, 1160.0, 128.0, 48.0, 48.0),
            400,
            vec![
                r(&[0.0, -15.0, 15.0, 0.0], 4000),
                y(&[0.0, 10.0, 0.0], 4000),
            ],
            500,
        ),
        icon(
            "icon-balloon",
            boxed(s, 80.0, 640.0, 48.0, 48.0),
            600,
            vec![r(&[0.0, 20.0, -20.0, 0.0], 3500)],
            1000,
        ),
        icon(
            "icon-star",
            boxed(s, 1168.0, 680.0, 64.0, 64.0),
            800,
            vec![
                r(&[0.0, -10.0, 10.0, 0.0], 2500),
                k(&[1.0, 1.1, 1.0], 2500),
            ],
            300,
        ),
        icon(
            "icon-gift-heart",
            boxed(s, 320.0, 266.0, 40.0, 40.0),
            1000,
            vec![y(&[0.0, -8.0, 0.0], 3000), r(&[0.0, 15.0, 0.0], 3000)],
            700,
        ),
        icon(
            "icon-gift",
            boxed(s, 920.0, 533.0, 40.0, 40.0),
            1200,
            vec![
                r(&[0.0, -20.0, 20.0, 0.0], 2800),
                k(&[1.0, 1.15, 1.0], 2800),
            ],
            1200,
        ),
        icon(
            "icon-bouquet",
            boxed(s, 426.0, 720.0, 48.0, 48.0),
            300,
            vec![
                r(&[0.0, 25.0, -25.0, 0.0], 3200),
                y(&[0.0, 5.0, 0.0], 3200),
            ],
            900,
        ),
        icon(
            "icon-sparkles",
            boxed(s, 853.0, 96.0, 40.0, 40.0),
            500,
            vec![
                y(&[0.0, -12.0, 0.0], 3500),
                r(&[0.0, -15.0, 15.0, 0.0], 3500),
            ],
            400,
        ),
    ];

    elements.push(element(
        "closing-note",
        boxed(s, 160.0, 150.0, 960.0, 500.0),
        in_view(0.0),
        enter(from(), 800, 0, Ease::EaseOut),
    ));
    for (i, delay) in [0u64, 200, 400].into_iter().enumerate() {
        elements.push(element(
            &format!("closing-line-{}", i + 1),
            boxed(s, 160.0, 170.0 + 160.0 * i as f64, 960.0, 140.0),
            in_view(-50.0),
            enter(lifted(40.0, 0.95), 800, delay, Ease::SMOOTH),
        ));
    }

    SectionConfig {
        id: "closing".to_owned(),
        bounds: band(s),
        elements,
    }
}
