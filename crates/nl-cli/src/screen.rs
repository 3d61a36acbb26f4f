//! The title screen: banner, fake boot report, welcome text.

use colored::Colorize;

const BANNER: &str = r"
 _  _ ___ _   _ ___  ___  _    ___ _  _ _  __  ____ ___  __   __
| \| | __| | | | _ \/ _ \| |  |_ _| \| | |/ / |__  ( _ )/  \ /  \
| .` | _|| |_| |   / (_) | |__ | || .` | ' /    / // _ \ () | () |
|_|\_|___|\___/|_|_\\___/|____|___|_|\_|_|\_\  /_/ \___/\__/ \__/
";

const RULE: &str =
    "=================================================================";

pub(crate) fn title() {
    println!("{}", BANNER.bold());
    println!("{}", RULE.dimmed());
    println!();
    println!("{}", "NEUROLINK-7800 PERSONAL COMPUTING SYSTEM".dimmed());
    println!(
        "{}",
        "BIOSYNTHETIC PROCESSOR v3.14.159 | NEURAL-RAM: 640K (SHOULD BE ENOUGH)".dimmed()
    );
    println!("{}", "GPT COMPILER x128 | QUANTUM OPTIMIZED".dimmed());
    println!(
        "{}",
        "CONSCIOUSNESS LINK: ACTIVE | REALITY ANCHOR: STABLE".dimmed()
    );
    println!();
    println!("{}", RULE.dimmed());
    println!();
    println!("Welcome, traveller. You've found your way to a small corner of the");
    println!("digital realm - a personal space where ideas take shape and projects");
    println!("come to life. This is where things get built.");
    println!();
    println!("Feel free to explore. Poke around. Break things (gently).");
    println!("The world responds to your curiosity.");
    println!();
    println!("Type HELP for commands. Type LOOK to begin.");
}
