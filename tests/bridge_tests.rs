//! End-to-end exercises of the marshalling boundary, driven the way a
//! drawing primitive would drive it: arguments arrive on the stack, native
//! code converts them, failures surface on the script side.

use std::sync::Arc;

use drawbridge::{
    BridgeError, CacheMode, Color, Dynamic, IMAGE_TYPE_TAG, MemorySink, NativeImage, ScriptHost,
    Table,
};

fn channel_table(red: f64, green: f64, blue: f64, alpha: f64) -> Dynamic {
    let mut table = Table::new();
    table.insert("red", Dynamic::Number(red));
    table.insert("green", Dynamic::Number(green));
    table.insert("blue", Dynamic::Number(blue));
    table.insert("alpha", Dynamic::Number(alpha));
    Dynamic::Table(table)
}

#[test]
fn drawing_call_reads_color_and_image_arguments() {
    let mut host = ScriptHost::new();
    let image = NativeImage::from_rgba(1, 1, vec![255, 0, 0, 255]);

    // Argument 1: fill color. Argument 2: the image, previously pushed
    // into script ownership.
    host.stack_mut().push(channel_table(0.2, 0.4, 0.6, 0.8));
    host.push_image(image.clone()).unwrap();

    let fill = host.color_at_or_black(1).unwrap();
    assert_eq!(fill, Color::srgb(0.2, 0.4, 0.6, 0.8));

    let pulled = host.pull_image(2).unwrap();
    assert!(pulled.same_resource(&image));
    assert_eq!(pulled.pixels(), &[255, 0, 0, 255]);
}

#[test]
fn malformed_color_is_recoverable_and_host_stays_usable() {
    let sink = Arc::new(MemorySink::new());
    let mut host = ScriptHost::with_sink(Box::new(sink.clone()));

    host.stack_mut().push(Dynamic::String("#ff0000".into()));
    assert_eq!(host.color_at_or_black(1), None);

    // The protected-call analog observes and clears the raised error.
    let raised = host.stack_mut().take_error().unwrap();
    assert!(raised.message.contains("string"));
    assert_eq!(sink.diagnostics().len(), 1);

    // The same host keeps converting afterwards.
    host.stack_mut().push(channel_table(0.0, 1.0, 0.0, 1.0));
    let color = host.color_at_or_black(2).unwrap();
    assert_eq!(color, Color::srgb(0.0, 1.0, 0.0, 1.0));
    assert!(!host.stack_mut().has_pending_error());
}

#[test]
fn image_ownership_transfers_once_and_tears_down_cleanly() {
    let mut host = ScriptHost::new();
    let image = NativeImage::new(8, 8);
    assert_eq!(image.cache_mode(), CacheMode::Default);

    let handle = host.push_image(image.clone()).unwrap();

    // Wrapping disabled duplicate caching on the shared resource.
    assert_eq!(image.cache_mode(), CacheMode::Never);
    assert!(host.registry().is_loaded(IMAGE_TYPE_TAG));

    // Script-side collection of the wrapped value.
    assert!(host.release_handle(handle));
    assert_eq!(image.reference_count(), 1);

    // The stack value is now a dangling handle; pulling it is rejected
    // rather than dereferenced.
    let err = host.pull_image(1).unwrap_err();
    assert!(matches!(err, BridgeError::StaleHandle { .. }));
}

#[test]
fn default_color_passes_through_untouched_when_argument_is_omitted() {
    let mut host = ScriptHost::new();
    let themed = Color::srgb(0.12, 0.34, 0.56, 0.78);

    // Nothing on the stack at all.
    assert_eq!(host.color_at(1, themed), Some(themed));

    host.stack_mut().push(Dynamic::Nil);
    assert_eq!(host.color_at(1, themed), Some(themed));
}

#[test]
fn console_and_string_helpers() {
    let sink = Arc::new(MemorySink::new());
    let mut host = ScriptHost::with_sink(Box::new(sink.clone()));

    host.stack_mut().push(Dynamic::String("loaded: init".into()));
    let message = host.check_string(1).unwrap().to_string();
    host.print_to_console(&message);

    assert_eq!(sink.lines(), vec!["loaded: init"]);
    assert!(sink.diagnostics().is_empty());

    let err = host.check_string(2).unwrap_err();
    assert!(matches!(err, BridgeError::CheckFailed { position: 2, .. }));
}
