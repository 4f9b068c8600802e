use backdrop_sim::FieldControl;
use bevy::prelude::*;

/// Keyboard lifecycle controls: Escape stops the field, Enter starts it again
pub fn field_control_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut control: EventWriter<FieldControl>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        control.send(FieldControl::Stop);
    }
    if keyboard.just_pressed(KeyCode::Enter) {
        control.send(FieldControl::Start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(key: KeyCode) -> Vec<FieldControl> {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<FieldControl>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, field_control_keys);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();
        let events = app.world().resource::<Events<FieldControl>>();
        events.get_cursor().read(events).copied().collect()
    }

    #[test]
    fn test_escape_stops_and_enter_starts() {
        assert_eq!(sent(KeyCode::Escape), vec![FieldControl::Stop]);
        assert_eq!(sent(KeyCode::Enter), vec![FieldControl::Start]);
        assert!(sent(KeyCode::Space).is_empty());
    }
}
