use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use toastkit_config::ToastConfig;
use toastkit_primitives::{
	AnimationPhase, ComponentRef, Message, Orientation, Position, TemplateRef, Toast, ToastId,
};

use super::*;
use crate::event::CloseEvent;
use crate::surface::{RecordingSurface, SurfaceOp};

const ELEMENT: ElementId = ElementId(7);

fn item(toast: Toast) -> ToastItem {
	ToastItem::new(ToastHandle::new(toast), Arc::new(ToastConfig::default()))
}

fn attached(toast: Toast) -> (ToastItem, RecordingSurface) {
	let mut item = item(toast);
	let mut surface = RecordingSurface::new();
	item.attach(&mut surface, ELEMENT);
	(item, surface)
}

fn run_frames(item: &mut ToastItem, surface: &mut RecordingSurface) {
	for _ in surface.take_frames() {
		item.on_frame(&*surface);
	}
}

fn after_closed(dismissed_by_action: bool) -> ToastEvent {
	ToastEvent::AfterClosed(CloseEvent {
		dismissed_by_action,
		id: ToastId::from("t1"),
	})
}

fn exit_signals(item: &mut ToastItem) {
	item.on_animation(AnimationSignal::start(AnimationPhase::Exit));
	item.on_animation(AnimationSignal::end(AnimationPhase::Exit));
}

#[test]
fn height_waits_for_first_frame() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	surface.set_height(ELEMENT, 48.0);

	assert!(item.take_events().is_empty());
	assert_eq!(surface.pending_frames(), &[ELEMENT]);

	run_frames(&mut item, &mut surface);
	assert_eq!(item.take_events(), vec![ToastEvent::Height(48.0)]);

	item.on_frame(&surface);
	assert!(item.take_events().is_empty());
}

#[test]
fn message_change_re_reports_height() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	run_frames(&mut item, &mut surface);
	item.take_events();

	item.handle().set_message("Saved, and synced");
	surface.set_height(ELEMENT, 64.0);
	item.toast_changed(&mut surface);
	item.toast_changed(&mut surface);
	assert_eq!(surface.pending_frames().len(), 1);

	run_frames(&mut item, &mut surface);
	assert_eq!(item.take_events(), vec![ToastEvent::Height(64.0)]);
}

#[test]
fn change_before_attach_does_not_measure() {
	let mut item = item(Toast::new("t1", "Saved"));
	let mut surface = RecordingSurface::new();
	item.toast_changed(&mut surface);
	assert!(surface.pending_frames().is_empty());
	item.on_frame(&surface);
	assert!(item.take_events().is_empty());
}

#[test]
fn empty_message_does_not_measure() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	run_frames(&mut item, &mut surface);
	item.handle().set_message(Message::Empty);
	item.toast_changed(&mut surface);
	assert!(surface.pending_frames().is_empty());
}

#[test]
fn automatic_close_is_not_dismissed_by_action() {
	let (mut item, _surface) = attached(Toast::new("t1", "Saved"));
	item.on_animation(AnimationSignal::end(AnimationPhase::Enter));
	assert_eq!(item.phase(), Phase::Visible);

	item.on_animation(AnimationSignal::start(AnimationPhase::Exit));
	assert_eq!(item.phase(), Phase::Exiting);
	item.on_animation(AnimationSignal::end(AnimationPhase::Exit));

	assert_eq!(
		item.take_events(),
		vec![ToastEvent::BeforeClosed, after_closed(false)]
	);
	assert_eq!(item.phase(), Phase::Closed);
}

#[test]
fn repeated_close_emits_one_pair() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	for _ in 0..3 {
		item.close(&mut surface);
	}
	let exits = surface
		.played()
		.iter()
		.filter(|spec| spec.phase == AnimationPhase::Exit)
		.count();
	assert_eq!(exits, 1);

	exit_signals(&mut item);
	exit_signals(&mut item);
	item.close(&mut surface);

	assert_eq!(
		item.take_events(),
		vec![ToastEvent::BeforeClosed, after_closed(true)]
	);
}

#[test]
fn manual_close_mid_duration() {
	let toast = Toast::new("t1", "Saved")
		.position(Position::TopRight)
		.duration(Duration::from_millis(4000));
	let (mut item, mut surface) = attached(toast);
	item.on_animation(AnimationSignal::end(AnimationPhase::Enter));

	item.close(&mut surface);
	assert!(item.is_manual_close());
	let played = surface.played();
	let exit = played.last().expect("close plays the exit animation");
	assert_eq!(exit.phase, AnimationPhase::Exit);
	assert_eq!(exit.orientation, Orientation::Negative);
	assert_eq!(exit.delay, Duration::ZERO);

	exit_signals(&mut item);
	assert_eq!(
		item.take_events(),
		vec![ToastEvent::BeforeClosed, after_closed(true)]
	);

	// The scheduled automatic exit would have finished here.
	exit_signals(&mut item);
	assert!(item.take_events().is_empty());
}

#[test]
fn close_after_automatic_exit_started_keeps_it_automatic() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	item.on_animation(AnimationSignal::start(AnimationPhase::Exit));
	item.close(&mut surface);
	item.on_animation(AnimationSignal::end(AnimationPhase::Exit));

	assert!(surface.played().is_empty());
	assert_eq!(
		item.take_events(),
		vec![ToastEvent::BeforeClosed, after_closed(false)]
	);
}

#[test]
fn close_before_attach_completes_synchronously() {
	let mut item = item(Toast::new("t1", "Saved"));
	let mut surface = RecordingSurface::new();
	item.close(&mut surface);

	assert!(surface.ops().is_empty());
	assert_eq!(
		item.take_events(),
		vec![ToastEvent::BeforeClosed, after_closed(true)]
	);

	item.attach(&mut surface, ELEMENT);
	assert!(!item.is_attached());
}

#[test]
fn destroy_before_completion_releases_and_closes_once() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	assert_eq!(surface.active_listeners(), 2);

	item.destroy(&mut surface);
	assert_eq!(surface.active_listeners(), 0);
	assert!(!item.is_attached());
	assert_eq!(item.phase(), Phase::Closed);

	exit_signals(&mut item);
	item.destroy(&mut surface);
	assert_eq!(
		item.take_events(),
		vec![ToastEvent::BeforeClosed, after_closed(true)]
	);
}

#[test]
fn destroy_mid_exit_does_not_repeat_before_closed() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	item.close(&mut surface);
	item.on_animation(AnimationSignal::start(AnimationPhase::Exit));
	item.destroy(&mut surface);

	assert_eq!(
		item.take_events(),
		vec![ToastEvent::BeforeClosed, after_closed(true)]
	);
}

#[test]
fn signals_before_attach_are_ignored() {
	let mut item = item(Toast::new("t1", "Saved"));
	exit_signals(&mut item);
	assert!(item.take_events().is_empty());
	assert_eq!(item.phase(), Phase::Entering);
}

#[test]
fn keyframe_names_drive_the_same_lifecycle() {
	let (mut item, _surface) = attached(Toast::new("t1", "Saved"));
	for (edge, name) in [
		(SignalEdge::Start, "toastExitSoftAnimationNegative"),
		(SignalEdge::End, "toastExitSoftAnimationNegative"),
		(SignalEdge::Start, "toastExitAnimationNegative"),
		(SignalEdge::End, "toastExitAnimationNegative"),
	] {
		let signal = AnimationSignal::from_keyframes(edge, name).unwrap();
		item.on_animation(signal);
	}
	assert_eq!(
		item.take_events(),
		vec![ToastEvent::BeforeClosed, after_closed(false)]
	);
}

#[rstest]
#[case(Position::TopLeft, Orientation::Negative)]
#[case(Position::TopCenter, Orientation::Negative)]
#[case(Position::BottomRight, Orientation::Positive)]
#[case(Position::MiddleLeft, Orientation::Positive)]
fn soft_transitions_use_own_orientation(
	#[case] position: Position,
	#[case] orientation: Orientation,
) {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved").position(position));

	item.soft_close(&mut surface);
	assert!(item.is_soft_closed());
	assert_eq!(item.phase(), Phase::SoftClosing);
	item.soft_open(&mut surface);
	assert!(!item.is_soft_closed());

	let played: Vec<_> = surface
		.played()
		.iter()
		.map(|spec| (spec.phase, spec.orientation))
		.collect();
	assert_eq!(
		played,
		vec![
			(AnimationPhase::SoftExit, orientation),
			(AnimationPhase::SoftEnter, orientation),
		]
	);

	item.on_animation(AnimationSignal::start(AnimationPhase::SoftEnter));
	item.on_animation(AnimationSignal::end(AnimationPhase::SoftEnter));
	assert_eq!(item.phase(), Phase::Visible);
	assert!(item.take_events().is_empty());
}

#[test]
fn soft_close_is_ignored_once_closing() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	item.close(&mut surface);
	surface.take_ops();

	item.soft_close(&mut surface);
	item.soft_open(&mut surface);
	assert!(surface.played().is_empty());
	assert!(!item.is_soft_closed());
}

#[test]
fn hover_requests_show_all() {
	let mut item = item(Toast::new("t1", "Saved"));
	item.mouse_enter();
	item.mouse_leave();
	assert_eq!(
		item.take_events(),
		vec![
			ToastEvent::ShowAllToasts(true),
			ToastEvent::ShowAllToasts(false),
		]
	);
	assert!(!item.is_expanded());
}

#[test]
fn hover_after_close_is_silent() {
	let mut item = item(Toast::new("t1", "Saved"));
	item.close(&mut RecordingSurface::new());
	item.take_events();
	item.mouse_enter();
	assert!(item.take_events().is_empty());
}

#[test]
fn toggle_group_flips_expanded() {
	let mut item = item(Toast::new("t1", "Group"));
	item.toggle_group(true);
	assert!(item.take_events().is_empty());

	item.set_group_children_toast_refs(vec![ToastHandle::new(Toast::new("c1", "one"))]);
	item.toggle_group(true);
	item.toggle_group(false);

	let toggle = |by_action, event| {
		ToastEvent::ToggleGroup(GroupToggle {
			by_action,
			event,
			id: ToastId::from("t1"),
		})
	};
	assert_eq!(
		item.take_events(),
		vec![
			toggle(true, GroupToggleKind::Expand),
			toggle(false, GroupToggleKind::Collapse),
		]
	);
	assert!(!item.is_expanded());
}

#[test]
fn attach_applies_attributes_in_order() {
	let toast = Toast::new("t1", "Saved")
		.attribute("role", "status")
		.attribute("aria-live", "polite");
	let (_item, surface) = attached(toast);
	let attributes: Vec<_> = surface
		.ops()
		.iter()
		.filter_map(|op| match op {
			SurfaceOp::SetAttribute(element, key, value) => {
				Some((*element, key.as_str(), value.as_str()))
			}
			_ => None,
		})
		.collect();
	assert_eq!(
		attributes,
		vec![(ELEMENT, "role", "status"), (ELEMENT, "aria-live", "polite")]
	);
}

#[test]
fn second_attach_is_ignored() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	item.attach(&mut surface, ElementId(8));
	assert_eq!(surface.active_listeners(), 2);
	item.destroy(&mut surface);
}

#[test]
fn init_binds_structured_content() {
	let mut text = item(Toast::new("t1", "Saved"));
	assert!(text.init().is_none());

	let template = Message::Template(TemplateRef {
		name: "upload-progress".into(),
	});
	let mut item = item(Toast::new("t1", template));
	let bound = item.init().expect("template binds").handle().clone();
	assert!(bound.ptr_eq(item.handle()));
	assert!(matches!(item.content(), Some(ContentBinding::Template { .. })));

	item.handle().set_message(Message::Component(ComponentRef {
		name: "undo".into(),
		parent_scope: Some("editor".into()),
	}));
	item.toast_changed(&mut RecordingSurface::new());
	match item.content() {
		Some(ContentBinding::Component { parent_scope, .. }) => {
			assert_eq!(parent_scope.as_deref(), Some("editor"));
		}
		other => panic!("expected component binding, got {other:?}"),
	}
}

#[test]
fn visual_inputs_flow_into_derived_state() {
	let toast = Toast::new("t1", "Saved")
		.position(Position::BottomLeft)
		.duration(Duration::from_secs(6));
	let mut item = item(toast);
	item.set_offset(30.0);
	item.set_toasts_after(1);

	assert!(!item.top());
	assert_eq!(item.translate_y(), -30.0);
	assert!((item.scale() - 0.95).abs() < 1e-9);
	assert_eq!(item.exit_animation_delay(), Duration::from_secs(6));

	item.set_showing_all(true);
	assert_eq!(item.scale(), 1.0);
	assert_eq!(item.visual().properties.exit_state.as_str(), "paused");

	item.set_config(Arc::new(ToastConfig {
		depth_scale: 0.1,
		..ToastConfig::default()
	}));
	item.set_showing_all(false);
	assert!((item.scale() - 0.9).abs() < 1e-9);
}

#[test]
fn group_height_counts_visible_children() {
	let mut root = item(Toast::new("t1", "Group"));
	let children = vec![
		ToastHandle::new(Toast::new("c1", "a").height(40.0)),
		ToastHandle::new(Toast::new("c2", "b").height(25.0).visible(false)),
		ToastHandle::new(Toast::new("c3", "c").height(35.0)),
	];
	root.set_group_children_toast_refs(children.clone());

	assert_eq!(root.group_height(), 75.0);
	let ids: Vec<_> = root.visible_toasts().into_iter().map(|t| t.id).collect();
	assert_eq!(ids, [ToastId::from("c1"), ToastId::from("c3")]);

	children[1].set_visible(true);
	children[0].set_height(50.0);
	assert_eq!(root.group_height(), 110.0);
	assert_eq!(root.group_children_toasts().len(), 3);
	assert_eq!(root.group_children_toast_refs().len(), 3);
}

#[test]
fn closed_item_emits_nothing_more() {
	let (mut item, mut surface) = attached(Toast::new("t1", "Saved"));
	item.set_group_children_toast_refs(vec![ToastHandle::new(Toast::new("c1", "one"))]);
	exit_signals(&mut item);
	item.take_events();

	run_frames(&mut item, &mut surface);
	item.toggle_group(true);
	item.mouse_enter();
	assert!(item.take_events().is_empty());
	assert!(!item.is_expanded());
}

#[test]
fn content_rebinds_only_on_variant_change() {
	let mut item = item(Toast::new("t1", "Saved"));
	let mut surface = RecordingSurface::new();
	item.toast_changed(&mut surface);
	item.handle().set_message(Message::Template(TemplateRef {
		name: "progress".into(),
	}));
	item.toast_changed(&mut surface);
	assert!(item.content().is_none(), "binding waits for init");

	assert!(item.init().is_some());
	item.handle().set_message(Message::Template(TemplateRef {
		name: "progress-done".into(),
	}));
	item.toast_changed(&mut surface);
	assert!(matches!(item.content(), Some(ContentBinding::Template { .. })));

	item.close(&mut surface);
	item.handle().set_message("Done");
	item.toast_changed(&mut surface);
	assert!(matches!(item.content(), Some(ContentBinding::Template { .. })));
}

proptest! {
	#[test]
	fn group_height_is_sum_of_visible(
		children in prop::collection::vec((0.0f64..200.0, any::<bool>()), 0..12),
	) {
		let mut root = item(Toast::new("t1", "Group"));
		let refs = children
			.iter()
			.enumerate()
			.map(|(i, (height, visible))| {
				ToastHandle::new(
					Toast::new(format!("c{i}"), "x").height(*height).visible(*visible),
				)
			})
			.collect();
		root.set_group_children_toast_refs(refs);

		let expected: f64 = children
			.iter()
			.filter(|(_, visible)| *visible)
			.map(|(height, _)| height)
			.sum();
		prop_assert!((root.group_height() - expected).abs() < 1e-9);
	}
}
