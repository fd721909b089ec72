// Navigation overlay state: the menu, the info panel and which section it
// shows. `NavState` holds the toggles; `NavView` mirrors the derived layout
// onto the page by flipping `hidden` attributes.

use crate::error::BackdropError;
use std::str::FromStr;
use web_sys::Document;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Contact,
    Projects,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Contact, Section::Projects];

    pub fn panel_id(&self) -> &'static str {
        match self {
            Section::About => "about-panel",
            Section::Contact => "contact-panel",
            Section::Projects => "projects-panel",
        }
    }
}

impl FromStr for Section {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "about" => Ok(Section::About),
            "contact" => Ok(Section::Contact),
            "projects" => Ok(Section::Projects),
            other => Err(BackdropError::UnknownSection(other.to_owned())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavLayout {
    pub menu_button: bool,
    pub nav_menu: bool,
    pub info_section: bool,
    pub active_panel: Option<Section>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    show_nav_menu: bool,
    show_info: bool,
    active_section: Option<Section>,
    portrait: bool,
}

impl NavState {
    pub fn new(portrait: bool) -> Self {
        NavState {
            show_nav_menu: true,
            show_info: false,
            active_section: None,
            portrait,
        }
    }

    pub fn select_section(&mut self, section: Section) {
        self.active_section = Some(section);
        self.show_info = true;
    }

    pub fn close_info(&mut self) {
        self.show_info = false;
    }

    pub fn open_menu(&mut self) {
        self.show_nav_menu = true;
    }

    pub fn close_menu(&mut self) {
        self.show_nav_menu = false;
    }

    pub fn set_portrait(&mut self, portrait: bool) {
        self.portrait = portrait;
    }

    pub fn is_portrait(&self) -> bool {
        self.portrait
    }

    pub fn active_section(&self) -> Option<Section> {
        self.active_section
    }

    // In portrait the menu and the info panel don't fit side by side, so an
    // open panel hides the menu
    pub fn layout(&self) -> NavLayout {
        NavLayout {
            menu_button: !self.show_nav_menu,
            nav_menu: self.show_nav_menu && (!self.portrait || !self.show_info),
            info_section: self.show_info,
            active_panel: if self.show_info { self.active_section } else { None },
        }
    }
}

pub struct NavView {
    document: Document,
}

impl NavView {
    pub const MENU_BUTTON_ID: &'static str = "nav-menu-btn";
    pub const NAV_MENU_ID: &'static str = "nav-menu";
    pub const INFO_SECTION_ID: &'static str = "info-section";

    pub fn new(document: Document) -> Self {
        NavView { document }
    }

    pub fn apply(&self, layout: NavLayout) -> Result<(), BackdropError> {
        self.set_visible(Self::MENU_BUTTON_ID, layout.menu_button)?;
        self.set_visible(Self::NAV_MENU_ID, layout.nav_menu)?;
        self.set_visible(Self::INFO_SECTION_ID, layout.info_section)?;
        for section in Section::ALL.iter() {
            self.set_visible(section.panel_id(), layout.active_panel == Some(*section))?;
        }
        Ok(())
    }

    fn set_visible(&self, id: &str, visible: bool) -> Result<(), BackdropError> {
        let element = match self.document.get_element_by_id(id) {
            Some(element) => element,
            None => {
                log::debug!("nav element #{} not on the page", id);
                return Ok(());
            }
        };
        if visible {
            element.remove_attribute("hidden")?;
        } else {
            element.set_attribute("hidden", "")?;
        }
        Ok(())
    }
}
