use std::fs;
use std::io;
use std::rc::Rc;

pub struct SourceImpl {
    pub name: String,
    pub content: String,
}

pub type Source = Rc<SourceImpl>;

pub fn file(path: &str) -> io::Result<Source> {
    let content = fs::read_to_string(path)?;
    Ok(Rc::new(SourceImpl {
        name: String::from(path),
        content,
    }))
}

pub fn text(text: &str) -> Source {
    Rc::new(SourceImpl {
        name: String::from("<text>"),
        content: String::from(text),
    })
}

impl SourceImpl {
    /// The byte at `index`, or `None` once `index` runs past the end of the text.
    pub fn byte(&self, index: usize) -> Option<u8> {
        self.content.as_bytes().get(index).copied()
    }

    /// Byte length of the character starting at `index`.
    pub fn char_width(&self, index: usize) -> usize {
        self.content
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .map(char::len_utf8)
            .unwrap_or(1)
    }

    pub fn lexeme(&self, index: usize, length: usize) -> &str {
        let end = index + length;
        &self.content[index..end]
    }
}

#[derive(Clone)]
pub struct Span {
    pub source: Source,
    pub index: usize,
    pub length: usize,
    pub line: usize,
}

impl Span {
    pub fn new(source: &Source, index: usize, length: usize, line: usize) -> Self {
        Span {
            source: Rc::clone(source),
            index,
            length,
            line,
        }
    }

    pub fn join<T: ContainsSpan, U: ContainsSpan>(start: &T, end: &U) -> Self {
        let start = start.span();
        let end = end.span();
        let length = (end.index + end.length).saturating_sub(start.index);
        Span::new(&start.source, start.index, length, start.line)
    }

    pub fn lexeme(&self) -> &str {
        self.source.lexeme(self.index, self.length)
    }

    pub fn location(&self) -> String {
        format!("{}:{}", self.source.name, self.line)
    }

    /// The full line containing the start of this span, and the span's offset within it.
    pub fn entire_line(&self) -> (String, usize) {
        let content = &self.source.content;
        let index = self.index.min(content.len());
        let line_start = content[..index].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = content[index..]
            .find('\n')
            .map(|i| index + i)
            .unwrap_or_else(|| content.len());
        let line = content[line_start..line_end].trim_end_matches('\r');
        (String::from(line), index - line_start)
    }
}

pub trait ContainsSpan {
    fn span(&self) -> &Span;
}

impl ContainsSpan for Span {
    fn span(&self) -> &Span {
        self
    }
}
