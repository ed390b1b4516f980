pub mod auth;
pub mod home;
pub mod media_form;
pub mod media_list;

/// Application pages and their router paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    MyMedia,
    AddMedia,
    EditMedia,
    Auth,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::MyMedia => "/media",
            Page::AddMedia => "/add",
            Page::EditMedia => "/edit/:id",
            Page::Auth => "/login",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_is_root() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::MyMedia.path(), "/media");
        assert_eq!(Page::Auth.path(), "/login");
    }
}
