// ABOUTME: Server-side HTML rendering for the home, list, detail, and creation form pages
// ABOUTME: Fills a shared page template; every dynamic value is HTML-escaped before insertion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{DetailPageProps, ListPageProps, NewRecipeForm};
use crate::constants::routes;

const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

const BACK_TO_LIST: &str = "<p><a href=\"/recipes\">レシピ一覧に戻る</a></p>";

/// Fill `{{NAME}}` placeholders in one pass so inserted values are never rescanned
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut html = String::with_capacity(template.len());
    let mut rest = template;
    while let Some((before, tail)) = rest.split_once("{{") {
        html.push_str(before);
        let filled = values.iter().find_map(|(name, value)| {
            tail.strip_prefix(*name)
                .and_then(|t| t.strip_prefix("}}"))
                .map(|after| (*value, after))
        });
        match filled {
            Some((value, after)) => {
                html.push_str(value);
                rest = after;
            }
            None => {
                html.push_str("{{");
                rest = tail;
            }
        }
    }
    html.push_str(rest);
    html
}

fn page(title: &str, body: &str) -> String {
    let title = encode_text(title);
    fill(PAGE_TEMPLATE, &[("TITLE", title.as_ref()), ("BODY", body)])
}

fn push_items(html: &mut String, tag: &str, items: &[String]) {
    let _ = write!(html, "<{tag}>");
    for item in items {
        let _ = write!(html, "<li>{}</li>", encode_text(item));
    }
    let _ = write!(html, "</{tag}>");
}

/// Home page linking to the list
#[must_use]
pub fn home() -> String {
    page(
        "レシピアプリへようこそ",
        &format!(
            "<h1>レシピアプリへようこそ！</h1>\
             <p>このアプリでは、いくつか簡単なレシピを紹介しています。</p>\
             <p><a href=\"{}\">レシピ一覧を見る</a></p>",
            routes::RECIPES_PAGE
        ),
    )
}

/// List page: one link per recipe, newest first
#[must_use]
pub fn list(props: &ListPageProps) -> String {
    let mut body = String::from("<h1>レシピ一覧</h1><ul>");
    for recipe in &props.recipes {
        let _ = write!(
            body,
            "<li id=\"recipe-{id}\"><a href=\"{base}/{slug}\"><h3>{title}</h3></a></li>",
            id = encode_double_quoted_attribute(&recipe.id),
            base = routes::RECIPES_PAGE,
            slug = encode_double_quoted_attribute(&urlencoding::encode(&recipe.slug)),
            title = encode_text(&recipe.title),
        );
    }
    let _ = write!(
        body,
        "</ul><p><a href=\"{}\">新しいレシピを追加</a></p>",
        routes::NEW_RECIPE_PAGE
    );
    page("レシピ一覧", &body)
}

/// Detail page, or its not-found state when the props carry no recipe
#[must_use]
pub fn detail(props: &DetailPageProps) -> String {
    let Some(recipe) = &props.recipe else {
        return not_found();
    };

    let mut body = format!("<h1>{}</h1>", encode_text(&recipe.title));
    if let Some(description) = &recipe.description {
        let _ = write!(body, "<p>{}</p>", encode_text(description));
    }
    body.push_str("<h2>材料</h2>");
    push_items(&mut body, "ul", &recipe.ingredients);
    body.push_str("<h2>作り方</h2>");
    push_items(&mut body, "ol", &recipe.instructions);
    body.push_str("<hr />");
    body.push_str(BACK_TO_LIST);
    page(&recipe.title, &body)
}

/// Not-found state shared by the detail page and unknown routes
#[must_use]
pub fn not_found() -> String {
    page(
        "レシピが見つかりません",
        &format!("<h1>レシピが見つかりませんでした</h1>{BACK_TO_LIST}"),
    )
}

/// Generic failure page carrying a user-facing message
#[must_use]
pub fn error(message: &str) -> String {
    page(
        "エラー",
        &format!("<h1>エラー</h1><p>{}</p>{BACK_TO_LIST}", encode_text(message)),
    )
}

/// Creation form, pre-filled with `form` and followed by an optional status line
#[must_use]
pub fn new_recipe_form(form: &NewRecipeForm, status: Option<&str>) -> String {
    let mut body = format!(
        "<h1>新しいレシピを追加</h1>\
         <form method=\"post\" action=\"{action}\">\
         <div><label for=\"slug\">スラッグ (URLに使用):</label>\
         <input id=\"slug\" name=\"slug\" type=\"text\" value=\"{slug}\" required></div>\
         <div><label for=\"title\">タイトル:</label>\
         <input id=\"title\" name=\"title\" type=\"text\" value=\"{title}\" required></div>\
         <div><label for=\"description\">説明:</label>\
         <textarea id=\"description\" name=\"description\">{description}</textarea></div>\
         <div><label for=\"ingredients\">材料 (一行ずつ入力):</label>\
         <textarea id=\"ingredients\" name=\"ingredients\" rows=\"5\" required>{ingredients}</textarea></div>\
         <div><label for=\"instructions\">作り方 (一行ずつ入力):</label>\
         <textarea id=\"instructions\" name=\"instructions\" rows=\"8\" required>{instructions}</textarea></div>\
         <button type=\"submit\">レシピを登録</button>\
         </form>",
        action = routes::NEW_RECIPE_PAGE,
        slug = encode_double_quoted_attribute(&form.slug),
        title = encode_double_quoted_attribute(&form.title),
        description = encode_text(&form.description),
        ingredients = encode_text(&form.ingredients),
        instructions = encode_text(&form.instructions),
    );
    if let Some(status) = status {
        let _ = write!(body, "<p class=\"status\">{}</p>", encode_text(status));
    }
    body.push_str("<hr />");
    body.push_str(BACK_TO_LIST);
    page("新しいレシピを追加", &body)
}
