use std::{panic, sync::Once};

/// Install the panic hook that lets `maybe_unwind` capture the panic
/// message and location of a failing procedure.
pub(crate) fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        install_panic_hook();
    });
}

fn install_panic_hook() {
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !maybe_unwind::capture_panic_info(info) {
            prev_hook(info);
        }
    }));
}
