use super::*;

#[test]
fn new_toast_defaults() {
	let toast = Toast::new("t1", "Saved");
	assert_eq!(toast.id.as_str(), "t1");
	assert_eq!(toast.kind, ToastKind::Blank);
	assert_eq!(toast.position, Position::TopCenter);
	assert_eq!(toast.duration, Duration::from_millis(4000));
	assert!(toast.auto_close);
	assert!(toast.visible);
	assert_eq!(toast.message, Message::Text("Saved".into()));
}

#[test]
fn kind_selects_duration() {
	let toast = Toast::new("t1", "Uploading").kind(ToastKind::Loading);
	assert_eq!(toast.duration, Duration::from_secs(30));

	let toast = Toast::new("t1", "Uploading")
		.kind(ToastKind::Loading)
		.duration(Duration::from_secs(2));
	assert_eq!(toast.duration, Duration::from_secs(2));
}

#[test]
fn attributes_keep_insertion_order() {
	let toast = Toast::new("t1", "Hi")
		.attribute("role", "status")
		.attribute("aria-live", "polite")
		.attribute("data-id", "t1");
	let keys: Vec<_> = toast.attributes.keys().map(String::as_str).collect();
	assert_eq!(keys, ["role", "aria-live", "data-id"]);
}

#[test]
fn message_presence() {
	assert!(!Message::Empty.is_present());
	assert!(!Message::from("").is_present());
	assert!(Message::from("x").is_present());
	assert!(
		Message::Template(TemplateRef {
			name: "tpl".into()
		})
		.is_present()
	);
}

#[test]
fn icon_kind() {
	assert!(Icon::Text("!".into()).is_text());
	assert!(
		!Icon::Descriptor {
			name: "check".into(),
			theme: None
		}
		.is_text()
	);
}

#[test]
fn kind_parse() {
	assert_eq!("warning".parse::<ToastKind>(), Ok(ToastKind::Warning));
	assert_eq!(
		"fatal".parse::<ToastKind>(),
		Err(ParseError::Kind("fatal".into()))
	);
}
