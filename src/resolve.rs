use crate::models::device::Device;

/// Result of matching a user-supplied name against the directory.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Single(Device),
    All(Vec<Device>),
    NotFound(String),
}

impl Resolution {
    /// Devices targeted by this resolution, in directory order.
    pub fn devices(&self) -> Option<&[Device]> {
        match self {
            Resolution::Single(device) => Some(std::slice::from_ref(device)),
            Resolution::All(devices) => Some(devices),
            Resolution::NotFound(_) => None,
        }
    }
}

/// Resolve a display name, or the whole directory when `name` is `None`.
///
/// Matching is case-insensitive equality on the full name. When several
/// devices share a name the first one in directory order is chosen.
pub fn resolve(directory: &[Device], name: Option<&str>) -> Resolution {
    let Some(name) = name else {
        return Resolution::All(directory.to_vec());
    };

    let wanted = name.to_lowercase();
    directory
        .iter()
        .find(|device| device.name.to_lowercase() == wanted)
        .map(|device| Resolution::Single(device.clone()))
        .unwrap_or_else(|| Resolution::NotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<Device> {
        vec![
            Device::new("1", "Kitchen Light"),
            Device::new("2", "Porch"),
            Device::new("3", "kitchen light"),
        ]
    }

    #[test]
    fn case_insensitive_match() {
        let dir = directory();
        let upper = resolve(&dir, Some("Kitchen Light"));
        let lower = resolve(&dir, Some("kitchen light"));
        let shouty = resolve(&dir, Some("KITCHEN LIGHT"));
        assert_eq!(upper, Resolution::Single(Device::new("1", "Kitchen Light")));
        assert_eq!(upper, lower);
        assert_eq!(upper, shouty);
    }

    #[test]
    fn duplicate_names_pick_first_in_directory_order() {
        let dir = directory();
        match resolve(&dir, Some("kitchen light")) {
            Resolution::Single(device) => assert_eq!(device.id, "1"),
            other => panic!("unexpected resolution: {:?}", other),
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(
            resolve(&directory(), Some("nonexistent")),
            Resolution::NotFound("nonexistent".into())
        );
        assert!(resolve(&directory(), Some("nonexistent")).devices().is_none());
    }

    #[test]
    fn partial_names_do_not_match() {
        assert!(matches!(
            resolve(&directory(), Some("Kitchen")),
            Resolution::NotFound(_)
        ));
    }

    #[test]
    fn no_name_targets_everything_in_order() {
        let dir = directory();
        let resolution = resolve(&dir, None);
        assert_eq!(resolution.devices().unwrap(), dir.as_slice());
    }

    #[test]
    fn empty_directory() {
        assert_eq!(resolve(&[], None), Resolution::All(vec![]));
        assert!(matches!(resolve(&[], Some("Lamp")), Resolution::NotFound(_)));
    }
}
