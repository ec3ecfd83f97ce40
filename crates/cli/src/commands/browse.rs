//! Page rendering through the fragment router.
//!
//! Every storefront page is registered as a route. `browse` opens the given
//! fragment, follows any redirects the pages queue, and prints the page the
//! router settles on.

use std::borrow::Cow;
use std::cell::RefCell;

use floralink_core::{Category, ProductId};
use floralink_storefront::Storefront;
use floralink_storefront::router::{NOT_FOUND_ROUTE, ROOT_PATH, RouteContext, Router};
use floralink_storefront::services::products::DEFAULT_FEATURED_LIMIT;

use super::products::summary;

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path that produced the page, after redirects.
    pub path: String,
    /// Text content.
    pub lines: Vec<String>,
}

type PageFn = fn(&Storefront, &mut RouteContext<'_>) -> Vec<String>;

/// Render and print the page for `fragment`.
#[allow(clippy::print_stdout)]
pub fn browse(app: &Storefront, fragment: &str) {
    let page = render(app, fragment);
    println!("#{}", page.path);
    println!();
    for line in &page.lines {
        println!("{line}");
    }
}

/// Render the page for `fragment`, following redirects.
pub fn render(app: &Storefront, fragment: &str) -> Page {
    let screen = RefCell::new(Vec::new());
    let mut router = Router::with_fragment(fragment);
    register_routes(&mut router, app, &screen);

    router.init();
    router.dispatch_pending();

    let path = router.current_route().unwrap_or(ROOT_PATH).to_owned();
    drop(router);
    Page {
        path,
        lines: screen.into_inner(),
    }
}

fn register_routes<'h>(router: &mut Router<'h>, app: &'h Storefront, screen: &'h RefCell<Vec<String>>) {
    router.add_route("/", page(app, screen, home));
    router.add_route("/category/:category", page(app, screen, category));
    router.add_route("/product/:id", page(app, screen, product));
    router.add_route("/cart", page(app, screen, cart));
    router.add_route("/checkout", page(app, screen, checkout));
    router.add_route("/login", page(app, screen, login));
    router.add_route("/signup", page(app, screen, signup));
    router.add_route("/admin", page(app, screen, admin));
    router.add_route(NOT_FOUND_ROUTE, page(app, screen, not_found));
}

/// Wrap a page function as a route handler that replaces the screen.
fn page<'h>(
    app: &'h Storefront,
    screen: &'h RefCell<Vec<String>>,
    view: PageFn,
) -> impl FnMut(&mut RouteContext<'_>) + 'h {
    move |ctx| {
        tracing::debug!(path = ctx.path(), state = ?ctx.state(), "Rendering page");
        let lines = view(app, ctx);
        *screen.borrow_mut() = lines;
    }
}

fn product_link(id: &ProductId) -> String {
    format!("#/product/{id}")
}

fn category_link(category: Category) -> String {
    format!("#/category/{}", urlencoding::encode(category.as_str()))
}

// =============================================================================
// Pages
// =============================================================================

fn home(app: &Storefront, _ctx: &mut RouteContext<'_>) -> Vec<String> {
    let mut lines = vec![
        "FloraLink - Fresh flowers for every occasion".to_owned(),
        String::new(),
        "Featured".to_owned(),
    ];
    let featured = app.products().list_featured(DEFAULT_FEATURED_LIMIT);
    if featured.is_empty() {
        lines.push("  No featured products yet".to_owned());
    }
    for product in &featured {
        lines.push(format!("  {}  {}", summary(product), product_link(&product.id)));
    }

    lines.push(String::new());
    lines.push("Shop by occasion".to_owned());
    for category in Category::ALL {
        lines.push(format!("  {category}  {}", category_link(category)));
    }
    lines
}

fn category(app: &Storefront, ctx: &mut RouteContext<'_>) -> Vec<String> {
    let raw = ctx.param("category").unwrap_or_default();
    let name = urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), Cow::into_owned);

    let products = app.products().list_by_category(&name);
    let mut lines = vec![name, String::new()];
    if products.is_empty() {
        lines.push("No products in this category yet".to_owned());
    }
    for product in &products {
        lines.push(format!("  {}  {}", summary(product), product_link(&product.id)));
    }
    lines
}

fn product(app: &Storefront, ctx: &mut RouteContext<'_>) -> Vec<String> {
    let id = ProductId::new(ctx.param("id").unwrap_or_default());
    let Some(product) = app.products().get_by_id(&id) else {
        return vec!["Product not found".to_owned(), "Back to home: #/".to_owned()];
    };

    let mut lines = vec![
        product.name.clone(),
        format!("{}  [{}]", product.price, product.category),
        product.image_url.clone(),
    ];
    if !product.description.is_empty() {
        lines.push(String::new());
        lines.push(product.description.clone());
    }
    lines.push(String::new());
    lines.push(format!("Add to cart: floralink cart add {}", product.id));
    lines
}

fn cart(app: &Storefront, _ctx: &mut RouteContext<'_>) -> Vec<String> {
    let cart = app.cart();
    let items = cart.list_with_details();
    if items.is_empty() {
        return vec![
            "Your cart is empty".to_owned(),
            "Continue shopping: #/".to_owned(),
        ];
    }

    let mut lines = vec!["Shopping Cart".to_owned(), String::new()];
    for line in &items {
        lines.push(format!(
            "  {:>3} x {}  {}",
            line.item.quantity,
            line.product.name,
            line.subtotal()
        ));
    }
    lines.push(String::new());
    lines.push(format!("Items: {}", cart.item_count()));
    lines.push(format!("Total: {}", cart.total()));
    lines.push("Proceed to checkout: #/checkout".to_owned());
    lines
}

fn checkout(app: &Storefront, ctx: &mut RouteContext<'_>) -> Vec<String> {
    let Some(user) = app.auth().current_user() else {
        ctx.navigate("/login");
        return Vec::new();
    };

    let cart = app.cart();
    let items = cart.list_with_details();
    if items.is_empty() {
        ctx.navigate("/cart");
        return Vec::new();
    }

    let mut lines = vec![
        "Checkout".to_owned(),
        String::new(),
        format!("Ordering as {} <{}>", user.name, user.email),
    ];
    for line in &items {
        lines.push(format!("  {:>3} x {}", line.item.quantity, line.product.name));
    }
    lines.push(format!("Total: {}", cart.total()));
    lines.push(String::new());
    lines.push("Pay by card or GCash:".to_owned());
    lines.push(
        "  floralink checkout -n <name> --phone <phone> -a <address> -m card --card-number <number>"
            .to_owned(),
    );
    lines.push(
        "  floralink checkout -n <name> --phone <phone> -a <address> -m gcash --gcash-screenshot <file>"
            .to_owned(),
    );
    lines
}

fn login(app: &Storefront, _ctx: &mut RouteContext<'_>) -> Vec<String> {
    let mut lines = vec!["Log in".to_owned()];
    if let Some(user) = app.auth().current_user() {
        lines.push(format!("Already logged in as {}", user.email));
    }
    lines.push("  floralink auth login -e <email> -p <password>".to_owned());
    lines.push("Don't have an account? #/signup".to_owned());
    lines
}

fn signup(_app: &Storefront, _ctx: &mut RouteContext<'_>) -> Vec<String> {
    vec![
        "Create an account".to_owned(),
        "  floralink auth signup -n <name> -e <email> -p <password>".to_owned(),
        "Already have an account? #/login".to_owned(),
    ]
}

fn admin(app: &Storefront, ctx: &mut RouteContext<'_>) -> Vec<String> {
    let auth = app.auth();
    if !auth.is_authenticated() {
        ctx.navigate("/login");
        return Vec::new();
    }
    if !auth.is_admin() {
        return vec![
            "Access Denied".to_owned(),
            "You don't have permission to access the admin dashboard.".to_owned(),
            "Back to home: #/".to_owned(),
        ];
    }

    let products = app.products().list();
    let mut lines = vec![
        "Admin Dashboard".to_owned(),
        String::new(),
        format!(
            "{} products, {} orders, {} users",
            products.len(),
            app.orders().list().len(),
            auth.all_users().len()
        ),
        String::new(),
    ];
    if products.is_empty() {
        lines.push("No products yet. Create your first product!".to_owned());
    }
    for product in &products {
        lines.push(format!("  {}", summary(product)));
    }
    lines
}

fn not_found(_app: &Storefront, ctx: &mut RouteContext<'_>) -> Vec<String> {
    vec![
        "404 - Page not found".to_owned(),
        format!("Nothing lives at {}", ctx.path()),
        "Back to home: #/".to_owned(),
    ]
}
