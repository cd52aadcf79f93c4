/// A stored editorial item.
///
/// `category` is kept as free text. Only the values known to [`Category`]
/// get a section on the home page.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Content {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub category: String,
    pub created_at: String,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    News,
    Article,
    Story,
    Poem,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Fragment id of the home page section, e.g. `/#stories`.
    pub fn anchor(&self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Article => "articles",
            Category::Story => "stories",
            Category::Poem => "poems",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Category::News => "Latest News",
            Category::Article => "Articles",
            Category::Story => "Stories",
            Category::Poem => "Poems",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Article => "Articles",
            Category::Story => "Stories",
            Category::Poem => "Poems",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Article => "Article",
            Category::Story => "Story",
            Category::Poem => "Poem",
        }
    }
}
