use crate::install::{InstallRoot, ProductInfo};
use crate::platform::Layout;

/// Print a success message
pub fn print_success(title: &str, message: &str) {
    println!("\n\x1b[1;34m╭\x1b[0m");
    println!("  ✅ \x1b[1;36m{}\x1b[0m", title);
    println!();
    println!("  \x1b[1;32m{}\x1b[0m", message);
    println!("\x1b[1;34m╰\x1b[0m");
}

/// Print what was found at an installation root
pub fn print_install_info(root: &InstallRoot, layout: &Layout, product: &ProductInfo) {
    println!("\n\x1b[1;34m╭\x1b[0m");
    println!("  🧭 \x1b[1;36mInstallation\x1b[0m\n");
    println!(
        "  📂 \x1b[1;34mRoot:\x1b[0m \x1b[1;33m{}\x1b[0m",
        root.path().display()
    );
    println!(
        "  💻 \x1b[1;34mPlatform:\x1b[0m \x1b[1;33m{}\x1b[0m",
        root.platform()
    );
    println!(
        "  🏷️  \x1b[1;34mProduct:\x1b[0m \x1b[1;32m{}\x1b[0m",
        product.id
    );
    println!(
        "  🔢 \x1b[1;34mVersion:\x1b[0m \x1b[1;32m{}\x1b[0m",
        product.version
    );
    println!(
        "  🧩 \x1b[1;34mPlugins:\x1b[0m \x1b[1;33m{}\x1b[0m",
        root.plugins_dir(layout).display()
    );
    println!(
        "  ⚙️  \x1b[1;34mLaunch config:\x1b[0m \x1b[1;33m{}\x1b[0m",
        root.launch_config(layout).display()
    );
    println!("\x1b[1;34m╰\x1b[0m");
}
