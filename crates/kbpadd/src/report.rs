use kbpad_device::{Button, Capabilities, Gamepad, KeyMap};

/// Human-readable lines describing a key map.
pub fn keymap_lines(map: &KeyMap) -> Vec<String> {
    let movement = &map.movement;
    let mut lines = vec![
        format!("latch: {}", map.latch),
        format!(
            "movement: left={} right={} down={} up={}",
            movement.left, movement.right, movement.down, movement.up
        ),
    ];
    lines.extend(
        map.bindings()
            .iter()
            .map(|(key, button)| format!("button {button}: {key}")),
    );
    lines
}

/// Human-readable lines describing a capability descriptor.
pub fn capability_lines(caps: &Capabilities) -> Vec<String> {
    let pad = &caps.gamepad;
    vec![
        format!(
            "type=0x{:02x} subtype=0x{:02x} flags=0x{:04x}",
            caps.device_type, caps.sub_type, caps.flags
        ),
        format!("buttons=0x{:04x}", pad.buttons),
        format!(
            "triggers=0x{:02x}/0x{:02x}",
            pad.left_trigger, pad.right_trigger
        ),
        format!(
            "sticks=0x{:04x}/0x{:04x}/0x{:04x}/0x{:04x}",
            pad.thumb_lx, pad.thumb_ly, pad.thumb_rx, pad.thumb_ry
        ),
        format!(
            "vibration={}/{}",
            caps.vibration.left_motor_speed, caps.vibration.right_motor_speed
        ),
    ]
}

/// One-line summary of a gamepad, listing pressed buttons by name.
pub fn gamepad_summary(pad: &Gamepad) -> String {
    let pressed: Vec<String> = Button::ALL
        .iter()
        .filter(|button| pad.is_pressed(**button))
        .map(ToString::to_string)
        .collect();
    let buttons = if pressed.is_empty() {
        "-".to_string()
    } else {
        pressed.join("+")
    };
    format!(
        "buttons={buttons} lt={} rt={} left=({}, {}) right=({}, {})",
        pad.left_trigger,
        pad.right_trigger,
        pad.thumb_lx,
        pad.thumb_ly,
        pad.thumb_rx,
        pad.thumb_ry
    )
}
