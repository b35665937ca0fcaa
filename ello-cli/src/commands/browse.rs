//! Interactive browsing session

use crate::render::{Renderer, LOADING_NOTICE};
use anyhow::Result;
use ello_core::catalog::CatalogSource;
use ello_core::{HomePage, SearchOption, Settings};
use std::io::{IsTerminal, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  type <text>     edit the search box without searching
  search <text>   search titles (empty text clears the search)
  suggest         show suggestions for the search box
  pick <n>        search for suggestion n
  clear           clear the search
  page <n>        go to page n
  next, prev      move one page
  toggle <n>      add or remove book n on this page
  remove <n>      remove entry n from the reading list
  list            show the reading list
  show            show the current page
  help            show this help
  quit            leave";

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Type(String),
    Search(String),
    Suggest,
    Pick(usize),
    Clear,
    Page(usize),
    Next,
    Prev,
    Toggle(usize),
    Remove(usize),
    List,
    Show,
    Help,
    Quit,
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let number = |what: &str| -> Result<usize, String> {
            match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(n),
                _ => Err(format!("'{}' needs a number of at least 1", what)),
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "type" => Ok(Action::Type(rest.to_string())),
            "search" | "s" => Ok(Action::Search(rest.to_string())),
            "suggest" => Ok(Action::Suggest),
            "pick" => number("pick").map(Action::Pick),
            "clear" => Ok(Action::Clear),
            "page" | "p" => number("page").map(Action::Page),
            "next" | "n" => Ok(Action::Next),
            "prev" => Ok(Action::Prev),
            "toggle" | "t" => number("toggle").map(Action::Toggle),
            "remove" | "rm" => number("remove").map(Action::Remove),
            "list" | "l" => Ok(Action::List),
            "show" | "" => Ok(Action::Show),
            "help" | "?" => Ok(Action::Help),
            "quit" | "exit" | "q" => Ok(Action::Quit),
            other => Err(format!("Unknown command '{}', try 'help'", other)),
        }
    }
}

/// The home page plus what the terminal needs to remember between commands
pub struct BrowseSession {
    page: HomePage,
    renderer: Renderer,
    suggestions: Vec<SearchOption>,
}

impl BrowseSession {
    pub fn new(page: HomePage, renderer: Renderer) -> Self {
        Self {
            page,
            renderer,
            suggestions: Vec::new(),
        }
    }

    pub fn page_mut(&mut self) -> &mut HomePage {
        &mut self.page
    }

    pub fn show(&mut self) -> String {
        self.renderer.page(&self.page.view())
    }

    /// Apply one action and return what to print
    pub fn handle(&mut self, action: Action) -> String {
        match action {
            Action::Type(text) => {
                self.page.type_text(text);
                self.suggest()
            }
            Action::Search(text) => {
                self.page.type_text(text);
                self.page.commit_input();
                self.show()
            }
            Action::Suggest => self.suggest(),
            Action::Pick(n) => match nth(&self.suggestions, n).cloned() {
                Some(option) => {
                    self.page.select_option(Some(option.title.as_str()));
                    self.show()
                }
                None => format!("No suggestion {}.", n),
            },
            Action::Clear => {
                self.page.select_option(None);
                self.show()
            }
            Action::Page(n) => {
                self.page.set_page(n);
                self.show()
            }
            Action::Next => {
                let next = self.page.page() + 1;
                self.page.set_page(next);
                self.show()
            }
            Action::Prev => {
                let prev = self.page.page().saturating_sub(1);
                self.page.set_page(prev);
                self.show()
            }
            Action::Toggle(n) => self.toggle(n),
            Action::Remove(n) => {
                match nth(self.page.reading_list().entries(), n).cloned() {
                    Some(book) => {
                        self.page.remove_book(&book);
                        format!("Removed {} from your reading list", book.title)
                    }
                    None => format!("No reading list entry {}.", n),
                }
            }
            Action::List => self.renderer.reading_list(self.page.reading_list().entries()),
            Action::Show => self.show(),
            Action::Help => HELP.to_string(),
            Action::Quit => String::new(),
        }
    }

    fn suggest(&mut self) -> String {
        self.suggestions = self.page.suggestions();
        self.renderer
            .suggestions(&self.suggestions, &self.page.settings().asset_root)
    }

    fn toggle(&mut self, n: usize) -> String {
        if self.page.load_state().is_loading() {
            return LOADING_NOTICE.to_string();
        }
        let shown = self.page.displayed_books();
        let book = match nth(&shown, n) {
            Some(book) => (*book).clone(),
            None => return format!("No book {} on this page.", n),
        };
        if self.page.toggle_book(&book) {
            format!("Added {} to your reading list", book.title)
        } else {
            format!("Removed {} from your reading list", book.title)
        }
    }
}

/// 1-indexed lookup
fn nth<T>(items: &[T], n: usize) -> Option<&T> {
    n.checked_sub(1).and_then(|i| items.get(i))
}

/// Run the session until `quit` or end of input.
///
/// Input is read while the catalog is still loading. When stdin is not a
/// terminal the catalog is awaited first so scripted sessions see every book.
pub async fn browse(
    settings: Settings,
    source: Arc<dyn CatalogSource>,
    renderer: Renderer,
) -> Result<()> {
    let page = HomePage::new(settings);
    let mut pending = page.start_fetch(source);
    let mut session = BrowseSession::new(page, renderer);
    let interactive = std::io::stdin().is_terminal();
    let mut settled = false;

    println!("{}", session.renderer.banner());
    if interactive {
        println!("{}", LOADING_NOTICE);
    } else {
        if let Some(outcome) = (&mut pending).await {
            session.page_mut().settle(outcome);
        }
        settled = true;
        println!("{}", session.show());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        tokio::select! {
            outcome = &mut pending, if !settled => {
                settled = true;
                if let Some(outcome) = outcome {
                    session.page_mut().settle(outcome);
                }
                println!();
                println!("{}", session.show());
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.parse::<Action>() {
                    Ok(Action::Quit) => break,
                    Ok(action) => println!("{}", session.handle(action)),
                    Err(message) => println!("{}", message),
                }
            }
        }
    }

    session.page.tear_down();
    tracing::debug!(
        entries = session.page.reading_list().len(),
        "Browse session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ello_core::{Book, Catalog, Theme};

    fn session() -> BrowseSession {
        let mut page = HomePage::new(Settings::default());
        page.settle(Ok(Catalog::new(vec![
            Book::new("Frog and Toad", "Lobel", "frog.jpg", "1"),
            Book::new("Goodnight Moon", "Brown", "moon.jpg", "1"),
        ])));
        BrowseSession::new(page, Renderer::new(&Theme::default(), false).unwrap())
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            "search goodnight moon".parse::<Action>(),
            Ok(Action::Search("goodnight moon".to_string()))
        );
        assert_eq!("search".parse::<Action>(), Ok(Action::Search(String::new())));
        assert_eq!("  toggle 2 ".parse::<Action>(), Ok(Action::Toggle(2)));
        assert_eq!("QUIT".parse::<Action>(), Ok(Action::Quit));
        assert_eq!("".parse::<Action>(), Ok(Action::Show));
        assert!("page 0".parse::<Action>().is_err());
        assert!("page two".parse::<Action>().is_err());
        assert!("dance".parse::<Action>().is_err());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut session = session();
        assert_eq!(
            session.handle(Action::Toggle(2)),
            "Added Goodnight Moon to your reading list"
        );
        assert!(session.handle(Action::List).contains("1. Goodnight Moon"));
        assert_eq!(
            session.handle(Action::Toggle(2)),
            "Removed Goodnight Moon from your reading list"
        );
        assert_eq!(session.handle(Action::Toggle(9)), "No book 9 on this page.");
    }

    #[test]
    fn test_type_suggest_and_pick() {
        let mut session = session();
        let shown = session.handle(Action::Type("moon".to_string()));
        assert!(shown.contains("Goodnight Moon"));
        assert!(!shown.contains("Frog"));

        let page = session.handle(Action::Pick(1));
        assert!(page.starts_with("Search: Goodnight Moon"));
        assert_eq!(session.handle(Action::Pick(5)), "No suggestion 5.");
    }

    #[test]
    fn test_remove_from_reading_list() {
        let mut session = session();
        session.handle(Action::Toggle(1));
        assert_eq!(
            session.handle(Action::Remove(1)),
            "Removed Frog and Toad from your reading list"
        );
        assert!(session.handle(Action::List).contains("Your reading list is empty."));
    }

    #[test]
    fn test_toggle_while_loading() {
        let page = HomePage::new(Settings::default());
        let mut session =
            BrowseSession::new(page, Renderer::new(&Theme::default(), false).unwrap());
        assert_eq!(session.handle(Action::Toggle(1)), LOADING_NOTICE);
    }
}
