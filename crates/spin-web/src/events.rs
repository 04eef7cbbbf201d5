use crate::constants::{ANCHOR_ID, CLEAR_BUTTON_ID, DAMPING_SLIDER_ID};
use crate::dom;
use crate::input;
use crate::panel;
use crate::scheduler::TimeoutScheduler;
use instant::Instant;
use spin_core::SpinSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebSession = SpinSession<TimeoutScheduler>;

#[derive(Clone)]
pub struct WidgetWiring {
    pub document: web::Document,
    pub anchor: web::Element,
    pub slider: web::HtmlInputElement,
    pub session: Rc<RefCell<WebSession>>,
    pub started: Instant,
}

type Listener = (web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>);

/// Event listeners owned by the widget so teardown can detach them.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        self.entries.push((target.clone(), event, closure));
    }

    pub fn detach_all(&mut self) {
        for (target, event, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

/// A live widget: its listeners and the session they feed.
pub struct MountedWidget {
    listeners: Listeners,
    session: Rc<RefCell<WebSession>>,
}

impl MountedWidget {
    /// Detach every listener and cancel the idle timer.
    pub fn teardown(mut self) {
        self.listeners.detach_all();
        self.session.borrow_mut().dispose();
    }
}

pub fn wire_widget(w: WidgetWiring) -> anyhow::Result<MountedWidget> {
    let mut listeners = Listeners::default();
    wire_pointermove(&w, &mut listeners);
    wire_pointerleave(&w, &mut listeners);
    wire_slider(&w, &mut listeners);
    wire_clear(&w, &mut listeners)?;
    Ok(MountedWidget {
        listeners,
        session: w.session,
    })
}

fn wire_pointermove(w: &WidgetWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(w.document.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !w2.anchor.is_connected() {
            return;
        }
        let point = input::pointer_client_point(ev);
        // Anchor may move with layout; never cache it.
        let center = input::element_center(&w2.anchor);
        let timestamp_ms = w2.started.elapsed().as_secs_f64() * 1000.0;
        w2.session
            .borrow_mut()
            .observe(point, timestamp_ms, center);
    });
}

fn wire_pointerleave(w: &WidgetWiring, listeners: &mut Listeners) {
    let Some(root) = w.document.document_element() else {
        return;
    };
    let w2 = w.clone();
    listeners.add(root.as_ref(), "pointerleave", move |_ev: web::Event| {
        w2.session.borrow_mut().pointer_left();
    });
}

fn wire_slider(w: &WidgetWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(w.slider.as_ref(), "input", move |_ev: web::Event| {
        let raw = w2.slider.value();
        let Some(factor) = input::parse_damping(&raw) else {
            log::warn!("[slider] ignoring value {:?}", raw);
            return;
        };
        match w2.session.borrow_mut().set_damping_factor(factor) {
            Ok(()) => panel::render_damping(&w2.document, factor),
            Err(e) => log::warn!("[slider] {}", e),
        }
    });
}

fn wire_clear(w: &WidgetWiring, listeners: &mut Listeners) -> anyhow::Result<()> {
    let button = dom::element_by_id(&w.document, CLEAR_BUTTON_ID)?;
    let w2 = w.clone();
    listeners.add(button.as_ref(), "click", move |_ev: web::Event| {
        w2.session.borrow_mut().reset();
        log::info!("[click] cleared revolutions");
    });
    Ok(())
}

pub type WidgetSlot = Rc<RefCell<Option<MountedWidget>>>;

/// Page lifecycle, wired once for the life of the page. `pagehide` tears the
/// widget down; a `pageshow` restoring the page from the back/forward cache
/// mounts it again through `mount`.
pub fn wire_lifecycle(
    window: &web::Window,
    slot: WidgetSlot,
    mount: impl Fn() -> anyhow::Result<MountedWidget> + 'static,
) {
    let hide_slot = slot.clone();
    let on_hide = Closure::wrap(Box::new(move |_ev: web::Event| {
        if let Some(widget) = hide_slot.borrow_mut().take() {
            widget.teardown();
            log::info!("[pagehide] widget torn down");
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let on_show = Closure::wrap(Box::new(move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if !input::should_remount(persisted, slot.borrow().is_some()) {
            return;
        }
        match mount() {
            Ok(widget) => {
                *slot.borrow_mut() = Some(widget);
                log::info!("[pageshow] restored from cache, widget remounted");
            }
            Err(e) => log::error!("[pageshow] remount failed: {:?}", e),
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}

pub fn lookup_anchor(document: &web::Document) -> anyhow::Result<web::Element> {
    dom::element_by_id(document, ANCHOR_ID)
}

pub fn lookup_slider(document: &web::Document) -> anyhow::Result<web::HtmlInputElement> {
    dom::input_by_id(document, DAMPING_SLIDER_ID)
}
