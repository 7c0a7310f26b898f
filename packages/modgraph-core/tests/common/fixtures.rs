//! Python source fixtures

/// A module made of plain `import` lines
pub fn fixture_with_imports(imports: &[&str]) -> String {
    let import_lines: String = imports
        .iter()
        .map(|imp| format!("import {imp}\n"))
        .collect();

    format!("{import_lines}\ndef main(): pass\n")
}

/// A module with one `from <module> import <names>` line
pub fn fixture_with_from_imports(module: &str, names: &[&str]) -> String {
    let names_str = names.join(", ");
    format!("from {module} import {names_str}\n\ndef main(): pass\n")
}

/// A function whose McCabe score is `1 + branches`
pub fn fixture_branchy_function(name: &str, branches: usize) -> String {
    let body: String = (0..branches)
        .map(|i| format!("    if x == {i}:\n        return {i}\n"))
        .collect();

    format!("def {name}(x):\n{body}    return -1\n")
}

/// A small scrapy-like layout: `(relative path, source)` pairs
pub fn fixture_crawler_package() -> Vec<(&'static str, String)> {
    vec![
        (
            "crawler/__init__.py",
            "from crawler.http import Request\nfrom crawler import spiders\n".to_string(),
        ),
        (
            "crawler/http/__init__.py",
            "from crawler.http.request import Request\n".to_string(),
        ),
        (
            "crawler/http/request.py",
            "import json\nfrom crawler.utils import misc\n\nclass Request:\n    def replace(self, **kwargs):\n        if kwargs:\n            return Request()\n        return self\n".to_string(),
        ),
        (
            "crawler/spiders/__init__.py",
            "from crawler.http import Request\nfrom .base import Spider\n".to_string(),
        ),
        (
            "crawler/spiders/base.py",
            "import logging\nfrom crawler import signals\n".to_string(),
        ),
        (
            "crawler/signals.py",
            "import crawler.spiders\n".to_string(),
        ),
        ("crawler/utils/__init__.py", String::new()),
        (
            "crawler/utils/misc.py",
            "from importlib import import_module\n".to_string(),
        ),
    ]
}
