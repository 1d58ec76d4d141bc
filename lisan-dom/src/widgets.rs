//! Calls into the page scripts: the animation-on-scroll library and the bootstrap widgets.
//!
//! These are loaded by the page itself, so every call checks that the global is present.

use js_sys::{Array, Function, Object, Reflect};
use lisan::error::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::js_error;

fn global(window: &web_sys::Window, name: &str) -> Option<JsValue> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .filter(|x| !x.is_undefined() && !x.is_null())
}

fn method(target: &JsValue, name: &str) -> Result<Function, Error> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(|err| js_error(format!("Cannot read {:?}", name), err))?
        .dyn_into::<Function>()
        .map_err(|_| Error::backend(format!("{:?} is not a function", name)))
}

fn aos_options() -> Result<Object, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"duration".into(), &1000.into())?;
    Reflect::set(&options, &"easing".into(), &"ease-in-out".into())?;
    Reflect::set(&options, &"once".into(), &true.into())?;
    Reflect::set(&options, &"offset".into(), &100.into())?;
    Ok(options)
}

/// Call `AOS.init(..)` if the library is loaded.
pub(crate) fn aos_init(window: &web_sys::Window) -> Result<(), Error> {
    let aos = match global(window, "AOS") {
        Some(x) => x,
        None => return Ok(()),
    };
    let options = aos_options().map_err(|err| js_error("Cannot build the AOS options", err))?;
    method(&aos, "init")?
        .call1(&aos, &options)
        .map_err(|err| js_error("AOS.init failed", err))?;
    Ok(())
}

/// Call `AOS.refresh()` if the library is loaded.
pub(crate) fn aos_refresh(window: &web_sys::Window) -> Result<(), Error> {
    let aos = match global(window, "AOS") {
        Some(x) => x,
        None => return Ok(()),
    };
    method(&aos, "refresh")?
        .call0(&aos)
        .map_err(|err| js_error("AOS.refresh failed", err))?;
    Ok(())
}

fn bootstrap_class(window: &web_sys::Window, name: &str) -> Result<Function, Error> {
    let bootstrap = global(window, "bootstrap")
        .ok_or_else(|| Error::backend("The bootstrap library is not loaded"))?;
    method(&bootstrap, name)
}

/// `new bootstrap.<name>(elem).<op>()`
pub(crate) fn bootstrap_new_and_call(
    window: &web_sys::Window,
    name: &str,
    elem: &web_sys::Element,
    op: &str,
) -> Result<(), Error> {
    let class = bootstrap_class(window, name)?;
    let instance = Reflect::construct(&class, &Array::of1(elem))
        .map_err(|err| js_error(format!("Cannot create bootstrap.{}", name), err))?;
    method(&instance, op)?
        .call0(&instance)
        .map_err(|err| js_error(format!("bootstrap.{}.{} failed", name, op), err))?;
    Ok(())
}

/// `bootstrap.<name>.getInstance(elem)?.<op>()`
///
/// Does nothing if the widget has never been created on the element.
pub(crate) fn bootstrap_instance_call(
    window: &web_sys::Window,
    name: &str,
    elem: &web_sys::Element,
    op: &str,
) -> Result<(), Error> {
    let class = bootstrap_class(window, name)?;
    let instance = method(&class, "getInstance")?
        .call1(&class, elem)
        .map_err(|err| js_error(format!("Cannot get the bootstrap.{} instance", name), err))?;
    if instance.is_null() || instance.is_undefined() {
        return Ok(());
    }
    method(&instance, op)?
        .call0(&instance)
        .map_err(|err| js_error(format!("bootstrap.{}.{} failed", name, op), err))?;
    Ok(())
}
