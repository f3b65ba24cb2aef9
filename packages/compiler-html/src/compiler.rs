use blockpage_model::{Element, ElementValue, Position};
use tracing::debug;

/// Options for HTML compilation
///
/// The defaults produce the plain export fragment: element markup
/// concatenated with no separator, no document wrapper and no escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reproduce canvas positions with absolutely positioned wrappers
    pub positioned: bool,
    /// Wrap the fragment in a minimal HTML document
    pub standalone: bool,
}

struct Context {
    options: CompileOptions,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize `elements` with the default options
pub fn serialize(elements: &[Element]) -> String {
    compile_to_html(elements, CompileOptions::default())
}

/// Compile the element list to HTML
///
/// Text is written verbatim: a value containing `<` or `"` lands in the
/// output unchanged.
pub fn compile_to_html(elements: &[Element], options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    if ctx.options.standalone {
        ctx.add("<!DOCTYPE html><html><head>");
        ctx.add("<meta charset=\"UTF-8\">");
        ctx.add("<title>Website</title>");
        ctx.add("</head><body>");
    }

    if ctx.options.positioned {
        ctx.add("<div style=\"position: relative;\">");
    }

    for element in elements {
        compile_positioned(element, &mut ctx);
    }

    if ctx.options.positioned {
        ctx.add("</div>");
    }

    if ctx.options.standalone {
        ctx.add("</body></html>");
    }

    let html = ctx.get_output();
    debug!(elements = elements.len(), bytes = html.len(), "Compiled HTML");
    html
}

fn compile_positioned(element: &Element, ctx: &mut Context) {
    match (ctx.options.positioned, element.position) {
        (true, Some(Position { x, y })) => {
            ctx.add(&format!(
                "<div style=\"position: absolute; left: {}px; top: {}px;\">",
                x, y
            ));
            compile_value(&element.value, ctx);
            ctx.add("</div>");
        }
        _ => compile_value(&element.value, ctx),
    }
}

fn compile_value(value: &ElementValue, ctx: &mut Context) {
    match value {
        ElementValue::Heading(text) => {
            ctx.add(&format!("<h1>{}</h1>", text));
        }
        ElementValue::Paragraph(text) => {
            ctx.add(&format!("<p>{}</p>", text));
        }
        ElementValue::Link(link) => {
            ctx.add(&format!("<a href=\"{}\">{}</a>", link.url, link.text));
        }
        ElementValue::List(items) => {
            ctx.add("<ul>");
            for item in items {
                ctx.add(&format!("<li>{}</li>", item));
            }
            ctx.add("</ul>");
        }
        ElementValue::Image(src) => {
            ctx.add(&format!("<img src=\"{}\" alt=\"User uploaded image\">", src));
        }
    }
}
