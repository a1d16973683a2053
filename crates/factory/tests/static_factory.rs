//! Exercises the static-factory macro surface from a foreign crate.

use kiln_factory::{
	Construct, FactoryError, InsertAction, Keyed, define_static_factory, impl_boxed_product,
	register_in_factory,
};
use serial_test::serial;

pub trait Widget {
	fn describe(&self) -> String;
}

struct Button {
	label: String,
}

impl Widget for Button {
	fn describe(&self) -> String {
		format!("button:{}", self.label)
	}
}

impl Keyed<&'static str> for Button {
	fn key() -> &'static str {
		"button"
	}
}

impl Construct<()> for Button {
	fn construct(_: ()) -> Self {
		Self { label: "ok".to_string() }
	}
}

impl Construct<(String,)> for Button {
	fn construct((label,): (String,)) -> Self {
		Self { label }
	}
}

struct Slider {
	min: i64,
	max: i64,
}

impl Widget for Slider {
	fn describe(&self) -> String {
		format!("slider:{}..{}", self.min, self.max)
	}
}

impl Keyed<&'static str> for Slider {
	fn key() -> &'static str {
		"slider"
	}
}

impl Construct<(i64, i64)> for Slider {
	fn construct((min, max): (i64, i64)) -> Self {
		Self { min, max }
	}
}

define_static_factory! {
	/// Widgets assembled by tests.
	pub WidgetFactory {
		product: Box<dyn Widget>,
		key: &'static str,
	}
}

register_in_factory!(WidgetFactory, Button, () (String));
register_in_factory!(WidgetFactory, Slider, (i64, i64));

struct Dial {
	value: i64,
}

impl Widget for Dial {
	fn describe(&self) -> String {
		format!("dial:{}", self.value)
	}
}

impl Keyed<String> for Dial {
	fn key() -> String {
		"dial".to_string()
	}
}

impl Construct<(i64,)> for Dial {
	fn construct((value,): (i64,)) -> Self {
		Self { value }
	}
}

impl_boxed_product!(Widget: Button, Slider, Dial);

define_static_factory! {
	/// Gauges with a default one-argument constructor signature.
	GaugeFactory {
		product: Box<dyn Widget>,
		key: String,
		default_args: (i64,),
	}
}

register_in_factory!(GaugeFactory, Dial);

#[test]
fn creates_with_default_signature() {
	let widget = WidgetFactory::create("button", ()).expect("statically registered");
	assert_eq!(widget.describe(), "button:ok");
}

#[test]
fn creates_with_overloaded_signature() {
	let widget = WidgetFactory::create("button", ("go".to_string(),)).expect("overload");
	assert_eq!(widget.describe(), "button:go");
	let widget = WidgetFactory::create("slider", (1i64, 10i64)).expect("two-arg overload");
	assert_eq!(widget.describe(), "slider:1..10");
}

#[test]
fn misses_are_silent() {
	assert!(WidgetFactory::create("tooltip", ()).is_none());
	assert!(WidgetFactory::create("slider", ()).is_none());
	assert!(WidgetFactory::create("button", (1i64,)).is_none());
}

#[test]
fn default_args_factory_uses_declared_signature() {
	let gauge = GaugeFactory::create("dial", (5i64,)).expect("default signature");
	assert_eq!(gauge.describe(), "dial:5");
	assert!(GaugeFactory::create("dial", ()).is_none());
}

#[test]
fn store_reflects_registrations() {
	assert!(WidgetFactory::contains("button"));
	assert!(!WidgetFactory::is_empty());
	assert!(WidgetFactory::len() >= 2);
	let button_sigs = WidgetFactory::with(|f| f.signatures_for("button").len());
	assert_eq!(button_sigs, 2);
}

#[test]
fn submissions_record_type_and_crate() {
	let mut type_names: Vec<&str> = inventory::iter::<WidgetFactoryReg>
		.into_iter()
		.map(|reg| reg.0.type_name)
		.collect();
	type_names.sort_unstable();
	assert_eq!(type_names, ["Button", "Slider"]);
	for reg in inventory::iter::<WidgetFactoryReg> {
		assert_eq!(reg.0.crate_name, env!("CARGO_PKG_NAME"));
	}
}

#[test]
#[serial]
fn runtime_registration_through_handle() {
	struct Checkbox;

	impl Widget for Checkbox {
		fn describe(&self) -> String {
			"checkbox".to_string()
		}
	}

	impl Keyed<&'static str> for Checkbox {
		fn key() -> &'static str {
			"checkbox"
		}
	}

	impl Construct<()> for Checkbox {
		fn construct(_: ()) -> Self {
			Checkbox
		}
	}

	impl_boxed_product!(Widget: Checkbox);

	let action = WidgetFactory::register::<Checkbox, ()>();
	assert_eq!(action, InsertAction::InsertedNew);
	let widget = WidgetFactory::create("checkbox", ()).expect("runtime registered");
	assert_eq!(widget.describe(), "checkbox");
}

#[test]
#[serial]
fn duplicate_runtime_registration_is_rejected() {
	let err = WidgetFactory::try_register::<Button, ()>().unwrap_err();
	assert!(matches!(err, FactoryError::DuplicateSignature { .. }));
	// The static registration still wins.
	let widget = WidgetFactory::create("button", ()).expect("original entry intact");
	assert_eq!(widget.describe(), "button:ok");
	// The error path records no collision.
	assert!(WidgetFactory::collisions().is_empty());
}
