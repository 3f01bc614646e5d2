use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use colored::Colorize;
use crossbeam_channel::{select, tick, unbounded};
use thiserror::Error;

use kbpad_device::{
    DeviceError, InputDriver, KeyMap, SlotTable, VirtualController, SUPPORTED_SLOT,
};
use kbpad_keyboard::{HostKeyboard, KeySnapshot, KeyState, KeyboardError};
use kbpad_profile::{ProfileError, ProfileLocation};
use kbpadd::poller::{PollEvent, Poller};
use kbpadd::report::{capability_lines, gamepad_summary, keymap_lines};
use kbpadd::{print_debug, print_info, print_warning};

#[derive(Debug, Error)]
pub(crate) enum RunError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("keyboard error: {0}")]
    Keyboard(#[from] KeyboardError),
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
    #[error("signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Polls the keyboard-driven controller until Ctrl+C or until the
/// keyboard backend closes.
pub(crate) fn run(profile: Option<&Path>, interval: Duration) -> Result<(), RunError> {
    let keymap = load_keymap(profile)?;
    // SDL must live on the thread that polls it.
    let keyboard = Rc::new(HostKeyboard::open()?);

    let mut table = SlotTable::new();
    table.configure(
        SUPPORTED_SLOT,
        VirtualController::with_keymap(keyboard.clone(), keymap),
    )?;
    let mut poller = Poller::new(table);

    let (stop_tx, stop_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })?;
    let ticker = tick(interval);

    print_info!(
        "kbpadd started. Polling every {}ms, press Ctrl+C to stop.",
        interval.as_millis()
    );
    loop {
        select! {
            recv(stop_rx) -> _ => {
                break;
            }
            recv(ticker) -> _ => {
                poller.tick_with(log_event);
                if keyboard.is_closed() {
                    print_warning!("keyboard window closed");
                    break;
                }
            }
        }
    }
    print_info!("kbpadd stopped.");
    Ok(())
}

/// Prints the capabilities reported for `slot`.
pub(crate) fn caps(slot: u32) -> Result<(), RunError> {
    let mut table = SlotTable::new();
    table.configure(SUPPORTED_SLOT, VirtualController::new(KeySnapshot::new()))?;

    let caps = table.describe_capabilities(slot)?;
    print_info!("slot {slot}:");
    for line in capability_lines(&caps) {
        print_info!("  {line}");
    }
    Ok(())
}

/// Parses the profile and prints the key map it produces.
pub(crate) fn check(profile: Option<&Path>) -> Result<(), RunError> {
    let keymap = load_keymap(profile)?;
    for line in keymap_lines(&keymap) {
        print_info!("  {line}");
    }
    Ok(())
}

fn load_keymap(profile: Option<&Path>) -> Result<KeyMap, ProfileError> {
    let location = ProfileLocation::new(profile)?;
    match location.load()? {
        Some(keymap) => {
            print_info!("loaded profile {}", location.path().display());
            Ok(keymap)
        }
        None => {
            print_warning!(
                "no profile at {}, using the default key map",
                location.path().display()
            );
            Ok(KeyMap::default())
        }
    }
}

fn log_event(event: PollEvent) {
    match event {
        PollEvent::Connected(slot) => {
            print_info!("slot {slot} connected");
        }
        PollEvent::Disconnected(slot) => {
            print_info!("slot {slot} disconnected");
        }
        PollEvent::Changed { slot, state } => {
            print_debug!(
                "slot {slot} packet {} {}",
                state.packet_number,
                gamepad_summary(&state.gamepad)
            );
        }
    }
}
