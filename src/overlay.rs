use crate::constants::*;
use crate::core::page::PopupState;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Contact popup shown when a portfolio card is clicked.
#[derive(Clone)]
pub struct Popup {
    backdrop: web::HtmlElement,
    content: Option<web::HtmlElement>,
    state: Rc<Cell<PopupState>>,
}

impl Popup {
    #[inline]
    pub fn state(&self) -> PopupState {
        self.state.get()
    }

    pub fn show(&self) {
        self.apply(PopupState::Open);
    }

    pub fn hide(&self) {
        self.apply(PopupState::Closed);
    }

    fn apply(&self, state: PopupState) {
        let cl = self.backdrop.class_list();
        for class in PopupState::CLOSED_CLASSES {
            if state.is_open() {
                _ = cl.remove_1(class);
            } else {
                _ = cl.add_1(class);
            }
        }
        if let Some(content) = &self.content {
            dom::set_style(content, "transform", state.content_transform());
        }
        if self.state.replace(state) != state {
            log::debug!("[popup] {:?}", state);
        }
    }
}

fn popup_markup() -> String {
    format!(
        r#"<div class="relative max-w-md w-full glass-card p-8 rounded-3xl border border-white/20 shadow-2xl transform scale-90 translate-z-0 transition-all duration-500" id="{content}">
    <button id="{close}" class="absolute top-4 right-4 text-white/50 hover:text-white transition-colors" aria-label="Close">
        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path></svg>
    </button>
    <div class="text-center">
        <h3 class="text-xl md:text-2xl font-bold text-white mb-4 leading-relaxed">Photo viewing is coming in a future update</h3>
        <div class="h-px w-12 bg-white/20 mx-auto mb-6"></div>
        <p class="text-gray-400 text-sm mb-2 uppercase tracking-widest">Contact for more information</p>
        <a href="mailto:{email}" class="text-neon-blue font-bold hover:underline">{email}</a>
    </div>
</div>"#,
        content = POPUP_CONTENT_ID,
        close = POPUP_CLOSE_ID,
        email = CONTACT_EMAIL,
    )
}

/// Build the popup, append it to `<body>` and wire its open/close triggers.
pub fn install_popup(document: &web::Document) -> anyhow::Result<Popup> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let backdrop: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    backdrop.set_id(POPUP_ID);
    backdrop.set_class_name(POPUP_CLASSES);
    backdrop.set_inner_html(&popup_markup());
    body.append_child(&backdrop)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let popup = Popup {
        backdrop: backdrop.clone(),
        content: dom::html_element_by_id(document, POPUP_CONTENT_ID),
        state: Rc::new(Cell::new(PopupState::Closed)),
    };

    let triggers = dom::query_html_elements(document, POPUP_TRIGGER_SELECTOR);
    for item in &triggers {
        let p = popup.clone();
        dom::add_listener(item, "click", move |_: web::MouseEvent| p.show());
    }

    let p = popup.clone();
    dom::add_click_listener(document, POPUP_CLOSE_ID, move || p.hide());

    // only a click on the backdrop itself closes; clicks inside the card do not
    let p = popup.clone();
    let backdrop_target = backdrop.clone();
    dom::add_listener(&backdrop, "click", move |ev: web::MouseEvent| {
        let hit_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Node>().ok())
            .map(|n| {
                let own: &web::Node = &backdrop_target;
                own.is_same_node(Some(&n))
            })
            .unwrap_or(false);
        if hit_backdrop {
            p.hide();
        }
    });

    log::info!("[popup] ready, {} triggers", triggers.len());
    Ok(popup)
}

/// Hamburger toggle plus a global `closeMobileMenu()` for menu links.
pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(button), Some(menu)) = (
        document.get_element_by_id(MOBILE_MENU_BUTTON_ID),
        document.get_element_by_id(MOBILE_MENU_ID),
    ) else {
        log::debug!("[page] no mobile menu");
        return;
    };

    let menu_toggle = menu.clone();
    dom::add_listener(&button, "click", move |_: web::MouseEvent| {
        _ = menu_toggle.class_list().toggle(HIDDEN_CLASS);
    });

    if let Some(window) = web::window() {
        dom::expose_global(&window, CLOSE_MOBILE_MENU_FN, move |_: wasm_bindgen::JsValue| {
            _ = menu.class_list().add_1(HIDDEN_CLASS);
        });
    }
}
