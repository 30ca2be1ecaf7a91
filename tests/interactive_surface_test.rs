//! Cross-component flows: item activation through classification into the
//! modal, modal lifecycle triggers, and scroll locking.

use folio::app::App;
use folio::carousel::Direction;
use folio::events::AppEvent;
use folio::layout::Viewport;
use folio::manifest::{MediaItem, Portfolio, Section};
use folio::modal::EmbedContent;
use folio::ui::hit_area::ClickAction;

fn portfolio() -> Portfolio {
    Portfolio {
        title: "Test".to_string(),
        sections: vec![
            Section {
                id: "reel".to_string(),
                title: "Reel".to_string(),
                items: vec![
                    MediaItem {
                        title: "YouTube long".to_string(),
                        url: "https://www.youtube.com/watch?v=abc123".to_string(),
                    },
                    MediaItem {
                        title: "YouTube short with params".to_string(),
                        url: "https://youtu.be/xyz789&t=5".to_string(),
                    },
                    MediaItem {
                        title: "Drive preview".to_string(),
                        url: "https://drive.google.com/file/d/1AbC/preview".to_string(),
                    },
                    MediaItem {
                        title: "Clip".to_string(),
                        url: "https://example.com/clip.mp4".to_string(),
                    },
                    MediaItem {
                        title: "Shot".to_string(),
                        url: "https://example.com/shot.webp".to_string(),
                    },
                    MediaItem {
                        title: "Photo".to_string(),
                        url: "https://example.com/photo.jpg".to_string(),
                    },
                ],
            },
            Section {
                id: "stills".to_string(),
                title: "Stills".to_string(),
                items: vec![MediaItem {
                    title: "One".to_string(),
                    url: "https://example.com/one.png".to_string(),
                }],
            },
        ],
    }
}

fn desktop_app() -> App {
    App::new(portfolio(), Viewport::new(120, 24, Some(1280)))
}

fn activate(app: &mut App, index: usize) {
    app.handle_event(AppEvent::Activate {
        carousel: "reel".to_string(),
        index,
    });
}

#[test]
fn youtube_item_mounts_embed_player() {
    let mut app = desktop_app();
    activate(&mut app, 0);

    assert!(app.modal.is_open());
    match app.modal.content() {
        Some(EmbedContent::Youtube { embed_url }) => assert_eq!(
            embed_url,
            "https://www.youtube.com/embed/abc123?autoplay=1&loop=1&playlist=abc123&modestbranding=1&rel=0"
        ),
        other => panic!("expected a YouTube embed, got {:?}", other),
    }
}

#[test]
fn short_url_id_stops_at_ampersand() {
    let mut app = desktop_app();
    activate(&mut app, 1);

    match app.modal.content() {
        Some(EmbedContent::Youtube { embed_url }) => {
            assert!(embed_url.contains("/embed/xyz789?"));
            assert!(embed_url.contains("playlist=xyz789"));
            assert!(!embed_url.contains("t=5"));
        }
        other => panic!("expected a YouTube embed, got {:?}", other),
    }
}

#[test]
fn drive_preview_mounts_frame_directly() {
    let mut app = desktop_app();
    activate(&mut app, 2);

    match app.modal.content() {
        Some(EmbedContent::DriveFrame { url }) => {
            assert_eq!(url, "https://drive.google.com/file/d/1AbC/preview");
        }
        other => panic!("expected a Drive frame, got {:?}", other),
    }
}

#[test]
fn video_gif_and_image_items_mount_their_kinds() {
    let mut app = desktop_app();

    activate(&mut app, 3);
    assert!(matches!(
        app.modal.content(),
        Some(EmbedContent::VideoPlayer { .. })
    ));

    activate(&mut app, 4);
    assert!(matches!(
        app.modal.content(),
        Some(EmbedContent::Picture { .. })
    ));

    activate(&mut app, 5);
    assert!(matches!(
        app.modal.content(),
        Some(EmbedContent::Picture { .. })
    ));
}

#[test]
fn reopening_replaces_the_mounted_content() {
    let mut app = desktop_app();
    activate(&mut app, 3);
    activate(&mut app, 0);

    // Exactly one content value is mounted: the second one
    match app.modal.content() {
        Some(EmbedContent::Youtube { .. }) => {}
        other => panic!("expected the second open's content, got {:?}", other),
    }
}

#[test]
fn escape_is_noop_while_closed_and_closes_while_open() {
    let mut app = desktop_app();

    app.handle_event(AppEvent::Escape);
    assert!(!app.modal.is_open());
    assert!(!app.scroll.is_locked());

    activate(&mut app, 0);
    assert!(app.scroll.is_locked());

    app.handle_event(AppEvent::Escape);
    assert!(!app.modal.is_open());
    assert_eq!(app.modal.content(), None);
    assert!(!app.scroll.is_locked(), "background scrolling restored");
}

#[test]
fn backdrop_click_closes_the_modal() {
    let mut app = desktop_app();
    activate(&mut app, 0);

    app.handle_click(ClickAction::ModalBackdrop);
    assert!(!app.modal.is_open());
    assert!(!app.scroll.is_locked());
}

#[test]
fn background_scroll_suppressed_while_open() {
    // 14 rows leave 12 content rows against 2 sections x 10 rows, so the
    // page has somewhere to scroll once the modal releases the lock
    let mut app = App::new(portfolio(), Viewport::new(120, 14, Some(1280)));
    activate(&mut app, 0);

    app.handle_event(AppEvent::ScrollBy(4));
    assert_eq!(app.scroll_row, 0);

    app.handle_event(AppEvent::CloseModal);
    app.handle_event(AppEvent::ScrollBy(4));
    assert!(app.scroll_row > 0);
}

#[test]
fn carousel_nav_is_independent_of_the_modal() {
    let mut app = desktop_app();
    activate(&mut app, 0);

    // Paging still works while the modal is open and does not disturb it
    app.handle_event(AppEvent::Nav {
        carousel: "reel".to_string(),
        direction: Direction::Next,
    });
    assert_eq!(app.carousels.offset("reel"), Some(1));
    assert!(app.modal.is_open());
}

#[test]
fn offset_invariant_holds_for_all_carousels() {
    let mut app = desktop_app();
    let moves = [
        ("reel", Direction::Next),
        ("reel", Direction::Next),
        ("reel", Direction::Prev),
        ("stills", Direction::Next),
        ("stills", Direction::Prev),
        ("reel", Direction::Prev),
        ("reel", Direction::Prev),
    ];
    for (id, direction) in moves {
        app.handle_event(AppEvent::Nav {
            carousel: id.to_string(),
            direction,
        });
        let visible = app.viewport.visible_count();
        for section_id in ["reel", "stills"] {
            let offset = app.carousels.offset(section_id).unwrap();
            let total = app.carousels.item_count(section_id).unwrap();
            assert!(offset <= total.saturating_sub(visible));
        }
    }
}
