/// Rich message: title, optional body, image and footer, plus a side colour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub footer: Option<String>,
    pub image: Option<String>,
    pub color: u32,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            ..Self::default()
        }
    }
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

impl std::fmt::Display for Embed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}]", self.title)?;
        if let Some(ref description) = self.description {
            write!(f, " {}", description.replace('\n', " "))?;
        }
        if let Some(ref image) = self.image {
            write!(f, " <{}>", image)?;
        }
        if let Some(ref footer) = self.footer {
            write!(f, " -- {}", footer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn builder_sets_fields() {
        let embed = Embed::new("Ace of Spades", 0x7fb2f0)
            .footer("51 cards remaining.")
            .image("http://host/a.png");
        assert_eq!(embed.title, "Ace of Spades");
        assert_eq!(embed.footer.as_deref(), Some("51 cards remaining."));
        assert_eq!(embed.image.as_deref(), Some("http://host/a.png"));
        assert!(embed.description.is_none());
    }
    #[test]
    fn display_is_single_line() {
        let embed = Embed::new("High or Low", 0).description("one\ntwo");
        assert_eq!(embed.to_string(), "[High or Low] one two");
    }
}
