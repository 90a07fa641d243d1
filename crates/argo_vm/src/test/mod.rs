use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::diagnostics::Diagnostic;
use crate::native_class;
use crate::params::VmParams;
use crate::value::class::{Class, OBJECT};
use crate::value::error::{ArgumentError, Error};
use crate::value::function::args::{defaulted, required, CallArgs, TrailingPolicy};
use crate::value::function::convert::NativeConversion;
use crate::value::function::native::{register_native_fn, CallContext};
use crate::value::handle::Handle;
use crate::value::reference::{NullableRef, Ref};
use crate::value::rgb::Rgb;
use crate::value::Value;
use crate::Vm;

static DISPLAY_OBJECT: Class = Class::new("DisplayObject", "flash.display", Some(&OBJECT));
static INTERACTIVE_OBJECT: Class = Class::new("InteractiveObject", "flash.display", Some(&DISPLAY_OBJECT));
static SPRITE: Class = Class::new("Sprite", "flash.display", Some(&INTERACTIVE_OBJECT));
static MOVIE_CLIP: Class = Class::new("MovieClip", "flash.display", Some(&SPRITE));
static SOUND: Class = Class::new("Sound", "flash.media", Some(&OBJECT));

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    lock_center: bool,
    constraint: Option<Rect>,
}

#[derive(Debug)]
struct DisplayObject {
    bounds: Rect,
    tint: Cell<Rgb>,
    drag: Cell<Option<Drag>>,
}
native_class!(DisplayObject, DISPLAY_OBJECT);

#[derive(Debug)]
struct InteractiveObject {
    base: DisplayObject,
}
native_class!(InteractiveObject, INTERACTIVE_OBJECT, extends base);

#[derive(Debug)]
struct Sprite {
    base: InteractiveObject,
}
native_class!(Sprite, SPRITE, extends base);

#[derive(Debug)]
struct MovieClip {
    base: Sprite,
    audio: RefCell<NullableRef<Sound>>,
}
native_class!(MovieClip, MOVIE_CLIP, extends base);

#[derive(Debug)]
struct Sound {
    name: Rc<str>,
}
native_class!(Sound, SOUND);

fn display_object() -> DisplayObject {
    DisplayObject {
        bounds: Rect {
            left: 0.0,
            top: 0.0,
            right: 100.0,
            bottom: 50.0,
        },
        tint: Cell::new(Rgb::default()),
        drag: Cell::new(None),
    }
}

fn sprite() -> Sprite {
    Sprite {
        base: InteractiveObject { base: display_object() },
    }
}

fn movie_clip() -> Ref<MovieClip> {
    Ref::new(MovieClip {
        base: sprite(),
        audio: RefCell::new(None),
    })
}

fn sound(name: &str) -> Ref<Sound> {
    Ref::new(Sound { name: name.into() })
}

/// `startDrag(lockCenter = false, left, top, right, bottom)`; the constraint is all four or nothing.
fn start_drag(mut cx: CallContext) -> Result<Value, Value> {
    let this = cx.this_as::<Sprite>()?;

    let mut args = cx.unpacker(TrailingPolicy::Strict);
    let lock_center = args.or_default(false)?;
    let constraint = if args.remaining() > 0 {
        Some(Rect {
            left: args.required()?,
            top: args.required()?,
            right: args.required()?,
            bottom: args.required()?,
        })
    } else {
        None
    };

    this.base.base.drag.set(Some(Drag {
        lock_center,
        constraint,
    }));
    Ok(Value::undefined())
}

fn attach_audio(mut cx: CallContext) -> Result<Value, Value> {
    let this = cx.this_as::<MovieClip>()?;
    let (audio,) = cx.unpack((required::<NullableRef<Sound>>(),))?;
    *this.audio.borrow_mut() = audio;
    Ok(Value::undefined())
}

fn attached_audio(cx: CallContext) -> Result<Value, Value> {
    let this = cx.this_as::<MovieClip>()?;
    let audio = this.audio.borrow().clone();
    Ok(audio.to_dynamic(cx.vm))
}

fn set_tint(mut cx: CallContext) -> Result<Value, Value> {
    let this = cx.this_as::<DisplayObject>()?;
    let (tint,) = cx.unpack((required::<Rgb>(),))?;
    this.tint.set(tint);
    Ok(Value::undefined())
}

fn tint(cx: CallContext) -> Result<Value, Value> {
    let this = cx.this_as::<DisplayObject>()?;
    Ok(this.tint.get().to_dynamic(cx.vm))
}

/// Extra arguments are tolerated, as some content passes a shape flag we don't support.
fn hit_test_point(mut cx: CallContext) -> Result<Value, Value> {
    let this = cx.this_as::<DisplayObject>()?;
    let (x, y) = cx.unpack_lenient((required::<f64>(), required::<f64>()))?;
    let Rect {
        left,
        top,
        right,
        bottom,
    } = this.bounds;
    Ok(Value::boolean((left..=right).contains(&x) && (top..=bottom).contains(&y)))
}

fn describe(mut cx: CallContext) -> Result<Value, Value> {
    let (label, count, separator) = cx.unpack((required::<String>(), defaulted(1u32), defaulted(String::from(","))))?;
    let repeated = vec![label; count as usize].join(&separator);
    Ok(repeated.to_dynamic(cx.vm))
}

fn verbose_vm() -> Vm {
    Vm::new(VmParams::new().set_verbose_diagnostics(true))
}

fn expect_argument_error(result: Result<Value, Value>, id: u32, message: &str) {
    let thrown = result.unwrap_err();
    let error = thrown.downcast_ref::<Error>().unwrap();
    assert_eq!(error.name(), "ArgumentError");
    assert_eq!(error.error_id(), id);
    assert_eq!(&**error.message(), message);
}

#[test]
fn start_drag_defaults() {
    let vm = &mut verbose_vm();
    let fun = Value::object(register_native_fn(vm, "startDrag", start_drag));
    let clip = movie_clip();

    let this = clip.to_dynamic(vm);
    let result = fun.apply(vm, this, CallArgs::empty());
    assert_eq!(result, Ok(Value::undefined()));
    assert_eq!(
        clip.base.base.base.drag.get(),
        Some(Drag {
            lock_center: false,
            constraint: None
        })
    );
    assert!(vm.diagnostics().is_empty());
}

#[test]
fn start_drag_constrained() {
    let vm = &mut verbose_vm();
    let fun = Value::object(register_native_fn(vm, "startDrag", start_drag));
    let clip = movie_clip();

    let args = [
        Value::boolean(true),
        Value::int(10),
        Value::string("20".into()),
        Value::number(110.5),
        Value::uint(70),
    ];
    let this = clip.to_dynamic(vm);
    fun.apply(vm, this, args).unwrap();
    assert_eq!(
        clip.base.base.base.drag.get(),
        Some(Drag {
            lock_center: true,
            constraint: Some(Rect {
                left: 10.0,
                top: 20.0,
                right: 110.5,
                bottom: 70.0
            })
        })
    );
}

#[test]
fn start_drag_partial_constraint() {
    let vm = &mut verbose_vm();
    let fun = Value::object(register_native_fn(vm, "startDrag", start_drag));
    let clip = movie_clip();

    let this = clip.to_dynamic(vm);
    let result = fun.apply(vm, this, [Value::boolean(true), Value::int(10)]);
    expect_argument_error(
        result,
        ArgumentError::WRONG_ARGUMENT_COUNT,
        "Error #1063: Argument count mismatch on startDrag. Expected 3, got 2.",
    );
    assert_eq!(clip.base.base.base.drag.get(), None);
    assert!(vm.diagnostics().is_empty());
}

#[test]
fn start_drag_trailing_arguments() {
    let vm = &mut verbose_vm();
    let fun = Value::object(register_native_fn(vm, "startDrag", start_drag));
    let clip = movie_clip();

    let args: Vec<Value> = (0..6).map(Value::int).collect();
    let this = clip.to_dynamic(vm);
    fun.apply(vm, this, args).unwrap();
    assert_eq!(
        vm.take_diagnostics(),
        vec![Diagnostic::TrailingArgumentsUnused {
            context: "startDrag".into(),
            supplied: 6,
            consumed: 5
        }]
    );
}

#[test]
fn incompatible_receiver() {
    let vm = &mut verbose_vm();
    let fun = Value::object(register_native_fn(vm, "startDrag", start_drag));

    let this = sound("beep").to_dynamic(vm);
    let thrown = fun.apply(vm, this, CallArgs::empty()).unwrap_err();
    let error = thrown.downcast_ref::<Error>().unwrap();
    assert_eq!(error.name(), "TypeError");
    assert_eq!(&**error.message(), "startDrag called on incompatible receiver Sound");

    // A plain DisplayObject is not a Sprite
    let shape = Value::object(Handle::new(display_object()));
    assert!(fun.apply(vm, shape, CallArgs::empty()).is_err());
}

#[test]
fn attach_audio_references() {
    let vm = &mut verbose_vm();
    let attach = Value::object(register_native_fn(vm, "attachAudio", attach_audio));
    let attached = Value::object(register_native_fn(vm, "attachedAudio", attached_audio));
    let clip = movie_clip();
    let beep = sound("beep");
    assert_eq!(beep.refcount(), 1);

    let this = clip.to_dynamic(vm);
    let arg = beep.to_dynamic(vm);
    attach.apply(vm, this.clone(), [arg]).unwrap();
    assert_eq!(beep.refcount(), 2);
    assert!(clip.audio.borrow().as_ref().unwrap().ptr_eq(&beep));

    let out = attached.apply(vm, this.clone(), CallArgs::empty()).unwrap();
    assert_eq!(out.downcast_ref::<Sound>().map(|s| &*s.name), Some("beep"));
    assert_eq!(beep.refcount(), 3);
    drop(out);

    attach.apply(vm, this.clone(), [Value::null()]).unwrap();
    assert!(clip.audio.borrow().is_none());
    assert_eq!(beep.refcount(), 1);
    assert_eq!(attached.apply(vm, this, CallArgs::empty()), Ok(Value::null()));
}

#[test]
fn attach_audio_type_check() {
    let vm = &mut verbose_vm();
    let attach = Value::object(register_native_fn(vm, "attachAudio", attach_audio));
    let clip = movie_clip();
    let this = clip.to_dynamic(vm);

    let other = Value::object(Handle::new(sprite()));
    expect_argument_error(
        attach.apply(vm, this.clone(), [other]),
        ArgumentError::CHECK_TYPE_FAILED,
        "Error #1034: Type Coercion failed: cannot convert Sprite to flash.media::Sound.",
    );
    expect_argument_error(
        attach.apply(vm, this.clone(), [Value::number(1.0)]),
        ArgumentError::CHECK_TYPE_FAILED,
        "Error #1034: Type Coercion failed: cannot convert Number to flash.media::Sound.",
    );
    expect_argument_error(
        attach.apply(vm, this, CallArgs::empty()),
        ArgumentError::WRONG_ARGUMENT_COUNT,
        "Error #1063: Argument count mismatch on attachAudio. Expected 1, got 0.",
    );
    assert!(clip.audio.borrow().is_none());
}

#[test]
fn tint_round_trip() {
    let vm = &mut verbose_vm();
    let set = Value::object(register_native_fn(vm, "setTint", set_tint));
    let get = Value::object(register_native_fn(vm, "tint", tint));
    let clip = movie_clip();
    let this = clip.to_dynamic(vm);

    set.apply(vm, this.clone(), [Value::uint(0xff8000)]).unwrap();
    assert_eq!(clip.base.base.base.tint.get(), Rgb::new(0xff, 0x80, 0x00));
    assert_eq!(get.apply(vm, this.clone(), CallArgs::empty()), Ok(Value::uint(0xff8000)));

    set.apply(vm, this.clone(), [Value::string("0x00ff00".into())]).unwrap();
    assert_eq!(clip.base.base.base.tint.get(), Rgb::new(0, 0xff, 0));

    // Anything that is not a number coerces to NaN and from there to black
    set.apply(vm, this, [Value::string("red".into())]).unwrap();
    assert_eq!(clip.base.base.base.tint.get(), Rgb::new(0, 0, 0));
}

#[test]
fn hit_test_ignores_extra_arguments() {
    let vm = &mut verbose_vm();
    let hit = Value::object(register_native_fn(vm, "hitTestPoint", hit_test_point));
    let this = movie_clip().to_dynamic(vm);

    let inside = [Value::int(50), Value::number(25.0), Value::boolean(true)];
    assert_eq!(hit.apply(vm, this.clone(), inside), Ok(Value::boolean(true)));
    let outside = [Value::int(150), Value::int(25)];
    assert_eq!(hit.apply(vm, this.clone(), outside), Ok(Value::boolean(false)));
    assert!(vm.diagnostics().is_empty());

    expect_argument_error(
        hit.apply(vm, this, [Value::int(1)]),
        ArgumentError::WRONG_ARGUMENT_COUNT,
        "Error #1063: Argument count mismatch on hitTestPoint. Expected 2, got 1.",
    );
}

#[test]
fn string_parameters() {
    let vm = &mut verbose_vm();
    let describe = Value::object(register_native_fn(vm, "describe", describe));

    let out = describe.apply(vm, Value::undefined(), [Value::string("ab".into()), Value::number(3.0)]);
    assert_eq!(out, Ok(Value::string("ab,ab,ab".into())));

    let out = describe.apply(
        vm,
        Value::undefined(),
        [Value::null(), Value::int(2), Value::string("-".into())],
    );
    assert_eq!(out, Ok(Value::string("null-null".into())));

    let out = describe.apply(vm, Value::undefined(), [Value::number(1e21)]);
    assert_eq!(out, Ok(Value::string("1e+21".into())));
}

#[test]
fn diagnostics_off() {
    let vm = &mut Vm::new(VmParams::new().set_verbose_diagnostics(false));
    let fun = Value::object(register_native_fn(vm, "startDrag", start_drag));
    let this = movie_clip().to_dynamic(vm);

    let args: Vec<Value> = (0..8).map(Value::int).collect();
    fun.apply(vm, this, args).unwrap();
    assert!(vm.diagnostics().is_empty());
}
