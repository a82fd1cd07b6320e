use gends_ui::tokens::{css_var, DesignToken, TokenGroup};

use super::*;

fn token_preview(group: TokenGroup, token: &DesignToken) -> View {
    let var = css_var(token.variable);
    match group {
        _ if group.is_color() => view! {
            <span class="gallery-token-swatch" style:background-color=var></span>
        }
        .into_view(),
        TokenGroup::Spacing => view! {
            <span class="gallery-token-bar" style:width=var></span>
        }
        .into_view(),
        TokenGroup::Radius => view! {
            <span class="gallery-token-box" style:border-radius=var></span>
        }
        .into_view(),
        TokenGroup::Shadow => view! {
            <span class="gallery-token-box" style:box-shadow=var></span>
        }
        .into_view(),
        TokenGroup::FontSize => view! { <span style:font-size=var>"Aa"</span> }.into_view(),
        TokenGroup::FontWeight => view! { <span style:font-weight=var>"Aa"</span> }.into_view(),
        _ => ().into_view(),
    }
}

#[component]
/// Design token catalog grouped by family.
pub fn TokensPage() -> impl IntoView {
    view! {
        <section class="gallery-page gallery-tokens">
            {TokenGroup::ALL
                .into_iter()
                .map(|group| view! {
                    <Story title=group.title() description=format!("{} tokens", group.tokens().len())>
                        <table class="gallery-token-table">
                            <tbody>
                                {group
                                    .tokens()
                                    .iter()
                                    .map(|token| view! {
                                        <tr>
                                            <td>{token_preview(group, token)}</td>
                                            <td>{token.name}</td>
                                            <td><code>{token.variable}</code></td>
                                            <td><code>{token.value}</code></td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </Story>
                })
                .collect_view()}
        </section>
    }
}
