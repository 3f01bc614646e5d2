use std::sync::atomic::{AtomicU32, Ordering};

use kbpad_keyboard::KeyState;

use crate::driver::InputDriver;
use crate::error::{DeviceError, Result};
use crate::keymap::KeyMap;
use crate::mapping::{map_gamepad, MovementMode};
use crate::types::{
    Capabilities, ControllerState, Gamepad, Keystroke, Vibration,
    DEVICE_SUBTYPE_GAMEPAD, DEVICE_TYPE_GAMEPAD,
};

/// The only slot a virtual controller answers on.
pub const SUPPORTED_SLOT: u32 = 0;

/// Packet number of a freshly created controller, before its first poll.
pub const INITIAL_PACKET_NUMBER: u32 = 1;

/// A controller whose state is read from the keyboard on every poll.
///
/// The packet counter is the only mutable state. It advances by one on
/// every successful poll, also when the keyboard did not change, and is
/// safe to advance from several threads at once.
#[derive(Debug)]
pub struct VirtualController<K> {
    keys: K,
    keymap: KeyMap,
    packet_number: AtomicU32,
}

impl<K: KeyState> VirtualController<K> {
    /// Creates a controller with the default key map.
    pub fn new(keys: K) -> Self {
        Self::with_keymap(keys, KeyMap::default())
    }

    pub fn with_keymap(keys: K, keymap: KeyMap) -> Self {
        Self {
            keys,
            keymap,
            packet_number: AtomicU32::new(INITIAL_PACKET_NUMBER),
        }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// The current packet counter. Before the first poll this is
    /// [`INITIAL_PACKET_NUMBER`], which no poll hands out.
    pub fn packet_number(&self) -> u32 {
        self.packet_number.load(Ordering::Relaxed)
    }

    fn check_slot(slot: u32) -> Result<()> {
        if slot == SUPPORTED_SLOT {
            Ok(())
        } else {
            log::trace!("no virtual controller at slot {slot}");
            Err(DeviceError::DeviceNotConnected(slot))
        }
    }
}

impl<K: KeyState> InputDriver for VirtualController<K> {
    fn describe_capabilities(&self, slot: u32) -> Result<Capabilities> {
        Self::check_slot(slot)?;

        Ok(Capabilities {
            device_type: DEVICE_TYPE_GAMEPAD,
            sub_type: DEVICE_SUBTYPE_GAMEPAD,
            flags: 0,
            gamepad: Gamepad {
                buttons: 0xFFFF,
                left_trigger: 0xFF,
                right_trigger: 0xFF,
                thumb_lx: -1,
                thumb_ly: -1,
                thumb_rx: -1,
                thumb_ry: -1,
            },
            vibration: Vibration::default(),
        })
    }

    fn poll_state(&self, slot: u32) -> Result<ControllerState> {
        Self::check_slot(slot)?;

        let packet_number =
            self.packet_number.fetch_add(1, Ordering::Relaxed).wrapping_add(1);

        self.keys.refresh();
        let mode = MovementMode::sample(&self.keys, &self.keymap);
        let gamepad = map_gamepad(mode, &self.keys, &self.keymap);

        Ok(ControllerState {
            packet_number,
            gamepad,
        })
    }

    fn set_actuation(&self, slot: u32, vibration: Vibration) -> Result<()> {
        Self::check_slot(slot)?;
        log::trace!(
            "ignoring vibration left={} right={}",
            vibration.left_motor_speed,
            vibration.right_motor_speed
        );
        Ok(())
    }

    fn dequeue_keystroke(&self, slot: u32, _flags: u32) -> Result<Keystroke> {
        Self::check_slot(slot)?;
        // Key transitions are not tracked, so there is never one to report.
        Err(DeviceError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use kbpad_keyboard::{Key, KeySnapshot};

    use super::*;
    use crate::types::Button;

    fn controller() -> (Arc<KeySnapshot>, VirtualController<Arc<KeySnapshot>>) {
        let keys = Arc::new(KeySnapshot::new());
        let device = VirtualController::new(keys.clone());
        (keys, device)
    }

    fn latch_on(keys: &KeySnapshot) {
        keys.set_toggled(Key::CapsLock, true);
    }

    #[test]
    fn starts_at_initial_packet_number() {
        let (_, device) = controller();
        assert_eq!(device.packet_number(), INITIAL_PACKET_NUMBER);

        let state = device.poll_state(0).unwrap();
        assert_eq!(state.packet_number, INITIAL_PACKET_NUMBER + 1);
    }

    #[test]
    fn unsupported_slot_is_not_connected_everywhere() {
        let (keys, device) = controller();
        keys.press(Key::Char('w'));

        for slot in [1, 2, 3, 4, u32::MAX] {
            let not_connected = DeviceError::DeviceNotConnected(slot);
            assert_eq!(device.describe_capabilities(slot), Err(not_connected));
            assert_eq!(device.poll_state(slot), Err(not_connected));
            assert_eq!(
                device.set_actuation(slot, Vibration::default()),
                Err(not_connected)
            );
            assert_eq!(device.dequeue_keystroke(slot, 0), Err(not_connected));
        }
        assert_eq!(device.packet_number(), INITIAL_PACKET_NUMBER);
    }

    #[test]
    fn capabilities_describe_full_gamepad() {
        let (_, device) = controller();
        let caps = device.describe_capabilities(0).unwrap();

        assert_eq!(caps.device_type, DEVICE_TYPE_GAMEPAD);
        assert_eq!(caps.sub_type, DEVICE_SUBTYPE_GAMEPAD);
        assert_eq!(caps.flags, 0);
        assert_eq!(caps.gamepad.buttons, 0xFFFF);
        assert_eq!(caps.gamepad.left_trigger, 0xFF);
        assert_eq!(caps.gamepad.right_trigger, 0xFF);
        for axis in [
            caps.gamepad.thumb_lx,
            caps.gamepad.thumb_ly,
            caps.gamepad.thumb_rx,
            caps.gamepad.thumb_ry,
        ] {
            assert_eq!(axis as u16, 0xFFFF);
        }
        assert_eq!(caps.vibration, Vibration::default());
        assert_eq!(device.packet_number(), INITIAL_PACKET_NUMBER);
    }

    #[test]
    fn every_poll_advances_by_one() {
        let (keys, device) = controller();
        keys.press(Key::Char('d'));

        let first = device.poll_state(0).unwrap();
        let second = device.poll_state(0).unwrap();
        let third = device.poll_state(0).unwrap();

        assert_eq!(first.gamepad, second.gamepad);
        assert_eq!(second.packet_number, first.packet_number + 1);
        assert_eq!(third.packet_number, second.packet_number + 1);
        assert_eq!(device.packet_number(), third.packet_number);
    }

    #[test]
    fn latch_on_opposing_keys_set_both_dpad_bits() {
        let (keys, device) = controller();
        latch_on(&keys);
        keys.press(Key::Char('a'));
        keys.press(Key::Char('d'));

        let pad = device.poll_state(0).unwrap().gamepad;
        assert!(pad.is_pressed(Button::DPadLeft));
        assert!(pad.is_pressed(Button::DPadRight));
        assert_eq!(pad.buttons, 0x000C);
        assert_eq!((pad.thumb_lx, pad.thumb_ly), (0, 0));
        assert_eq!((pad.thumb_rx, pad.thumb_ry), (0, 0));
    }

    #[test]
    fn latch_off_opposing_keys_cancel_to_zero() {
        let (keys, device) = controller();
        keys.press(Key::Char('a'));
        keys.press(Key::Char('d'));
        keys.press(Key::Char('s'));
        keys.press(Key::Char('w'));

        let pad = device.poll_state(0).unwrap().gamepad;
        assert_eq!(pad.thumb_lx, 0);
        assert_eq!(pad.thumb_ly, 0);
        assert_eq!(pad.buttons, 0);
    }

    #[test]
    fn latch_off_up_pushes_stick_to_maximum() {
        let (keys, device) = controller();
        keys.press(Key::Char('w'));

        let pad = device.poll_state(0).unwrap().gamepad;
        assert_eq!(pad.thumb_ly, i16::MAX);
        assert_eq!(pad.thumb_lx, 0);
        assert_eq!(pad.left_trigger, 0);
        assert_eq!(pad.right_trigger, 0);

        keys.release(Key::Char('w'));
        keys.press(Key::Char('s'));
        let pad = device.poll_state(0).unwrap().gamepad;
        assert_eq!(pad.thumb_ly, i16::MIN);
    }

    #[test]
    fn face_and_menu_buttons_ignore_latch() {
        let (keys, device) = controller();
        for key in [
            Key::Char('l'),
            Key::Apostrophe,
            Key::Semicolon,
            Key::Char('p'),
            Key::Char('z'),
            Key::Char('x'),
        ] {
            keys.press(key);
        }
        let expected = 0x4000 | 0x2000 | 0x1000 | 0x8000 | 0x0020 | 0x0010;

        let off = device.poll_state(0).unwrap().gamepad;
        assert_eq!(off.buttons, expected);

        latch_on(&keys);
        let on = device.poll_state(0).unwrap().gamepad;
        assert_eq!(on.buttons, expected);
    }

    #[test]
    fn latch_switch_applies_on_next_poll() {
        let (keys, device) = controller();
        keys.press(Key::Char('w'));
        keys.press(Key::Semicolon);

        let stick = device.poll_state(0).unwrap().gamepad;
        assert_eq!(stick.thumb_ly, i16::MAX);
        assert_eq!(stick.pressed().count(), 1);

        latch_on(&keys);
        let dpad = device.poll_state(0).unwrap().gamepad;
        assert_eq!(dpad.thumb_ly, 0);
        assert!(dpad.is_pressed(Button::DPadUp));
        assert!(dpad.is_pressed(Button::A));
    }

    #[test]
    fn set_actuation_is_accepted_and_inert() {
        let (_, device) = controller();
        let strong = Vibration {
            left_motor_speed: u16::MAX,
            right_motor_speed: 1,
        };
        assert_eq!(device.set_actuation(0, strong), Ok(()));
        assert_eq!(device.packet_number(), INITIAL_PACKET_NUMBER);
        assert_eq!(device.poll_state(0).unwrap().gamepad, Gamepad::default());
    }

    #[test]
    fn keystroke_is_always_empty() {
        let (keys, device) = controller();
        keys.press(Key::Char('p'));

        for flags in [0, 1, u32::MAX] {
            assert_eq!(device.dequeue_keystroke(0, flags), Err(DeviceError::Empty));
        }
        assert_eq!(device.packet_number(), INITIAL_PACKET_NUMBER);
    }

    #[test]
    fn concurrent_polls_each_advance_once() {
        const THREADS: u32 = 8;
        const POLLS: u32 = 250;

        let (_, device) = controller();
        let device = Arc::new(device);
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let device = device.clone();
                thread::spawn(move || {
                    (0..POLLS)
                        .map(|_| device.poll_state(0).unwrap().packet_number)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen: Vec<u32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        seen.sort_unstable();
        seen.dedup();

        assert_eq!(seen.len() as u32, THREADS * POLLS);
        assert_eq!(device.packet_number(), INITIAL_PACKET_NUMBER + THREADS * POLLS);
    }

    #[test]
    fn custom_keymap_is_sampled() {
        let keys = Arc::new(KeySnapshot::new());
        let mut map = KeyMap::without_bindings();
        map.latch = Key::ScrollLock;
        map.bind(Button::RightShoulder, Key::Char('e'));
        let device = VirtualController::with_keymap(keys.clone(), map);

        keys.set_toggled(Key::CapsLock, true);
        keys.press(Key::Char('w'));
        keys.press(Key::Char('e'));
        keys.press(Key::Semicolon);

        let pad = device.poll_state(0).unwrap().gamepad;
        assert_eq!(pad.thumb_ly, i16::MAX);
        assert_eq!(pad.buttons, 0x0200);
    }
}
