use crate::ui::carousel::{Carousel, CarouselIntent};
use crate::ui::icons::IconSet;
use crate::ui::theme::Theme;

/// Demo page hosting a single carousel.
pub struct App {
    should_quit: bool,
    carousel: Carousel,
    theme: Theme,
    icons: Box<dyn IconSet>,
}

impl App {
    pub fn new(carousel: Carousel, theme: Theme, icons: Box<dyn IconSet>) -> Self {
        Self {
            should_quit: false,
            carousel,
            theme,
            icons,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn icons(&self) -> &dyn IconSet {
        self.icons.as_ref()
    }

    pub fn dispatch(&mut self, intent: CarouselIntent) -> bool {
        self.carousel.dispatch(intent)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
