use ratatui::{backend::TestBackend, Terminal};

use samtal_core::flow::ConfirmOutcome;
use samtal_core::models::FieldKind;
use samtal_core::SamtalConfig;
use samtal_tui::app::App;
use samtal_tui::ui::layout::MainLayout;

fn test_config() -> SamtalConfig {
    let mut config = SamtalConfig::default();
    // keep tests off the network
    config.branding.fetch_logo = false;
    config
}

fn rendered_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
}

#[tokio::test]
async fn test_chat_screen_renders_brand_and_keybinds() {
    let app = App::new(test_config()).await.unwrap();
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal.draw(|frame| MainLayout::render(frame, &app)).unwrap();

    let text = rendered_text(&terminal);
    assert!(text.contains("Svea Studio AI-Assistent"));
    assert!(text.contains("Avsluta"));
    assert!(text.contains("Boka tid"));
}

#[tokio::test]
async fn test_booking_modal_renders_all_sections() {
    let mut app = App::new(test_config()).await.unwrap();
    app.open_booking();

    let backend = TestBackend::new(100, 36);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| MainLayout::render(frame, &app)).unwrap();

    let text = rendered_text(&terminal);
    assert!(text.contains("AI-Bokningssystem"));
    assert!(text.contains("Tillgängliga Tider"));
    assert!(text.contains("10:30"));
    assert!(text.contains("Kontaktuppgifter"));
    assert!(text.contains("Bekräfta Min AI-Konsultation"));
    assert!(text.contains("Steg 1 av 4"));
}

#[tokio::test]
async fn test_confirmed_booking_renders_success_dialog() {
    let mut app = App::new(test_config()).await.unwrap();
    app.open_booking();

    {
        let modal = app.booking.as_mut().unwrap();
        // run the fade-in so the flow accepts edits
        for _ in 0..16 {
            modal.flow.tick();
        }
        modal.flow.selection.form.field_mut(FieldKind::Name).set("Anna Andersson");
        modal
            .flow
            .selection
            .form
            .field_mut(FieldKind::Email)
            .set("anna.andersson@foretag.se");
        modal
            .flow
            .selection
            .form
            .field_mut(FieldKind::Company)
            .set("Innovativa Lösningar AB");
        modal.flow.select_quick(0).unwrap();
        modal.flow.select_slot(1).unwrap();
        assert!(matches!(
            modal.flow.confirm(),
            ConfirmOutcome::Confirmed(_)
        ));
    }

    let backend = TestBackend::new(100, 36);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| MainLayout::render(frame, &app)).unwrap();

    let text = rendered_text(&terminal);
    assert!(text.contains("Bokning Bekräftad!"));
    assert!(text.contains("Anna Andersson"));
    assert!(text.contains("10:30"));
}

#[tokio::test]
async fn test_small_terminal_does_not_panic() {
    let mut app = App::new(test_config()).await.unwrap();
    app.open_booking();

    let backend = TestBackend::new(40, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| MainLayout::render(frame, &app)).unwrap();
}
