use super::LocalNameHash;

const fn hash(name: &str) -> u64 {
    match LocalNameHash::of(name).value() {
        Some(h) => h,
        None => panic!("Tag name can't be represented as a local name hash"),
    }
}

/// Tag names referenced by the classification tables.
#[repr(u64)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tag {
    A = hash("a"),
    Abbr = hash("abbr"),
    Acronym = hash("acronym"),
    Address = hash("address"),
    Applet = hash("applet"),
    Area = hash("area"),
    B = hash("b"),
    Base = hash("base"),
    Basefont = hash("basefont"),
    Bdo = hash("bdo"),
    Big = hash("big"),
    Blockquote = hash("blockquote"),
    Br = hash("br"),
    Button = hash("button"),
    Center = hash("center"),
    Cite = hash("cite"),
    Code = hash("code"),
    Col = hash("col"),
    Colgroup = hash("colgroup"),
    Dd = hash("dd"),
    Del = hash("del"),
    Dfn = hash("dfn"),
    Dir = hash("dir"),
    Div = hash("div"),
    Dl = hash("dl"),
    Dt = hash("dt"),
    Em = hash("em"),
    Embed = hash("embed"),
    Fieldset = hash("fieldset"),
    Font = hash("font"),
    Form = hash("form"),
    Frame = hash("frame"),
    Frameset = hash("frameset"),
    Hr = hash("hr"),
    I = hash("i"),
    Iframe = hash("iframe"),
    Img = hash("img"),
    Input = hash("input"),
    Ins = hash("ins"),
    Isindex = hash("isindex"),
    Kbd = hash("kbd"),
    Label = hash("label"),
    Li = hash("li"),
    Link = hash("link"),
    Map = hash("map"),
    Menu = hash("menu"),
    Meta = hash("meta"),
    Noframes = hash("noframes"),
    Noscript = hash("noscript"),
    Object = hash("object"),
    Ol = hash("ol"),
    Option = hash("option"),
    P = hash("p"),
    Param = hash("param"),
    Pre = hash("pre"),
    Q = hash("q"),
    S = hash("s"),
    Samp = hash("samp"),
    Script = hash("script"),
    Select = hash("select"),
    Small = hash("small"),
    Span = hash("span"),
    Strike = hash("strike"),
    Strong = hash("strong"),
    Style = hash("style"),
    Sub = hash("sub"),
    Sup = hash("sup"),
    Table = hash("table"),
    Tbody = hash("tbody"),
    Td = hash("td"),
    Textarea = hash("textarea"),
    Tfoot = hash("tfoot"),
    Th = hash("th"),
    Thead = hash("thead"),
    Tr = hash("tr"),
    Tt = hash("tt"),
    U = hash("u"),
    Ul = hash("ul"),
    Var = hash("var"),
}

macro_rules! tag_is_one_of {
    ($hash:expr, [$($tag:ident),+]) => {
        $($hash == $crate::html::Tag::$tag)||+
    };
}
