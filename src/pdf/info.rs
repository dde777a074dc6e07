/// Document properties shown by PDF viewers.
///
/// No creation or modification date is ever written, so rendering the same content
/// twice yields the same bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creator: Option<String>,
}

impl Info {
    pub fn title<S: Into<String>>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn author<S: Into<String>>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.into());
        self
    }

    pub fn subject<S: Into<String>>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn keywords<S: Into<String>>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn creator<S: Into<String>>(&mut self, creator: S) -> &mut Self {
        self.creator = Some(creator.into());
        self
    }
}

/// An entry in the document outline, pointing at the top of some content on a page.
#[derive(Clone, Debug, PartialEq)]
pub struct Bookmark {
    pub title: String,
    pub page_index: usize,
    pub top: super::Pt,
    pub children: Vec<Bookmark>,
}
