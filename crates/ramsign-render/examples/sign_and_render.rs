//! Example: Sign a RAMS document in all three modes and render the
//! resulting history panel.
//!
//! Run with:
//!   cargo run --example sign_and_render

use ramsign_capture::{CaptureMode, Point, SigningSession};
use ramsign_render::{render_audit_list, RenderedSignature};
use ramsign_types::{MemoryStore, SignatureStore, SIGNATURE_STYLES};

fn main() {
    tracing_subscriber::fmt().init();

    let store = MemoryStore::new();
    store.register_signer("user-jane", "Jane Doe", "jane@site.example");
    store.register_signer("user-sam", "Sam Mason", "sam@site.example");
    store.register_signer("user-ada", "Ada Price", "ada@site.example");

    // Jane types her name
    let mut session = SigningSession::new("rams-demo", "user-jane");
    session
        .pad_mut()
        .expect("session is capturing")
        .set_typed_name("Jane Doe");
    session.submit(&store).expect("typed submit");

    // Sam picks a catalog style for his
    let mut session = SigningSession::new("rams-demo", "user-sam");
    {
        let pad = session.pad_mut().expect("session is capturing");
        pad.select_mode(CaptureMode::Styled);
        pad.set_typed_name("Sam Mason");
        pad.select_style(2).expect("style 2 is in the catalog");
    }
    session.submit(&store).expect("styled submit");

    // Ada draws hers freehand
    let mut session = SigningSession::new("rams-demo", "user-ada");
    {
        let pad = session.pad_mut().expect("session is capturing");
        pad.select_mode(CaptureMode::Drawn);
        pad.begin_stroke(Point::new(60.0, 120.0));
        pad.extend_stroke(Point::new(140.0, 60.0));
        pad.extend_stroke(Point::new(230.0, 130.0));
        pad.extend_stroke(Point::new(330.0, 70.0));
        pad.end_stroke();
    }
    session.submit(&store).expect("drawn submit");

    // Render the history panel, newest first
    let records = store
        .list_for_document("rams-demo")
        .expect("memory store never fails to list");
    let entries = render_audit_list(&records, &SIGNATURE_STYLES);

    println!("Signatures for rams-demo:\n");
    for entry in entries {
        let shown = match &entry.rendered {
            RenderedSignature::PlainText { name } => format!("\"{}\"", name),
            RenderedSignature::StyledText { name, style } => {
                format!("\"{}\" in {} ({})", name, style.name, style.class)
            }
            RenderedSignature::Image { src } => format!("drawing, {} byte data URI", src.len()),
            RenderedSignature::Fallback { label } => label.to_string(),
        };
        println!(
            "  {} <{}> at {}: {}",
            entry.signer_name, entry.signer_email, entry.signed_at, shown
        );
    }
}
