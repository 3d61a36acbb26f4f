//! Everyone who lives here, with their dialogue pools.
//!
//! The four tunnel dwellers keep static pools too; their scripted
//! selectors read these lines back out of the world state.

use nl_core::{Npc, WorldState};

pub(crate) fn install(world: &mut WorldState) {
    world.add_npc(
        Npc::new(
            "friendly_lookout",
            "friendly lookout",
            "A person in a weatherproof jacket leans against the storefront, grin \
             weathered and eyes skyward. They watch the clouds like a sailor \
             reading waves.",
        )
        .in_room("outside")
        .with_aliases(["stranger", "lookout", "person"])
        .with_dialogue([
            "Lovely evening, if you ignore the rehearsal overhead. Strange things \
             keep happening in town - delightful if you like mysteries.",
            "Storm's coming. Pick your shelter: safe, daring, or both. The shop's \
             got layers if you fancy poking them.",
            "You look like someone who builds things. Creative chaos in the eyes. \
             Respect.",
            "That glint near the door? Pigeons have no use for luck. You might.",
            "If the neon ever holds still, it tries to spell something poetic.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "sofia",
            "Sofia",
            "Sofia sits cross-legged on the rug, UNO cards in hand, laughter in \
             reserve. A suitcase half-packed peeks from behind the sofa.",
        )
        .in_room("home")
        .with_aliases(["woman", "partner", "sofia"])
        .with_dialogue([
            "Fancy a round? Loser makes the next coffee. Winner gets bragging \
             rights all the way to Portugal.",
            "We're packing in our heads already - Lisbon sun, family hugs, the \
             whole thing. Don't forget to enjoy the now, though.",
            "The girls keep stacking Draw Fours like it's strategy. I'm not \
             convinced, but it's adorable.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "lilah",
            "Lilah",
            "Lilah fans UNO cards dramatically, trying to keep a straight face. \
             Her nails are painted in mismatched colours, a secret code only she \
             knows.",
        )
        .in_room("home")
        .with_aliases(["girl", "child", "lilah"])
        .with_dialogue([
            "If you go to Portugal without me, take my best card. Actually no, \
             take two.",
            "I'm going to win this game and then the next one on the plane.",
            "Do you think the sea there smells like this room when it's raining?",
            "Do you think we'll leave before the storm decides to be rude?",
            "We're so lucky, Daddy! It feels like the universe saved this hand \
             just for us.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "olivia",
            "Olivia",
            "Olivia lies on her stomach, giggling at her own UNO puns. She keeps \
             glancing at a toy suitcase with stickers half-peeled.",
        )
        .in_room("home")
        .with_aliases(["girl", "child", "olivia"])
        .with_dialogue([
            "When we get to Portugal I'm teaching the cousins this game. They'll \
             never see it coming.",
            "Uno means one. I have two snacks. That's strategy.",
            "The storm outside sounds like the train in my head. Choo-choo \
             dramatic!",
            "Do you think we'll actually get going before the clouds get bored?",
        ]),
    );

    world.add_npc(
        Npc::new(
            "desk_bot",
            "desk robot",
            "A small desk robot peers from beside the monitor, two camera-eyes and \
             a single tiny speaker perched on a plastic base.",
        )
        .in_room("home_office")
        .with_aliases(["desk bot", "robot", "bot"])
        .with_dialogue([
            "\"Debugging...\" the little robot chirps, as if stuck between logs.",
            "The robot whirs and announces, \"Debugging...\" in a tone that \
             suggests this may take a while.",
            "Lights blink across the robot's face. \"Debugging...\" it repeats, \
             cheerfully resigned.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "past_paranoid",
            "murmuring figure",
            "A hunched figure traces shapes on the damp wall, muttering dates \
             backwards.",
        )
        .in_room("tunnel")
        .with_aliases(["figure", "past", "murmurer"])
        .with_dialogue([
            "Did we leave something unfinished back there? Everything echoes if \
             you listen long enough.",
            "Memories rearrange themselves when no one's looking. I keep trying \
             to pin them down.",
            "The past is behind us, which is unfortunate because I can only walk \
             forward.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "future_paranoid",
            "wide-eyed figure",
            "A figure clings to the wall, eyes darting as if trying to see \
             tomorrow through concrete.",
        )
        .in_room("tunnel")
        .with_aliases(["figure", "future", "wide-eyed"])
        .with_dialogue([
            "You've seen it, haven't you? The boxes upstairs-the future humming \
             inside them?",
            "If you know how this ends, whisper it. I'll trade you my last \
             certainty.",
            "You've seen it! Please tell me! You've seen the box! Please tell me \
             how it works! Was it a success?",
            "What if the storm is just the compile finishing?",
        ]),
    );

    world.add_npc(
        Npc::new(
            "lost_wanderer",
            "bewildered wanderer",
            "A person in office clothes stares at their shoes as if expecting \
             instructions to be written there.",
        )
        .in_room("tunnel")
        .with_aliases(["wanderer", "lost", "traveller"])
        .with_dialogue([
            "I took a wrong turn between meetings and dreams. Do you know the way \
             out?",
            "Was there ever sunlight? I feel like there was sunlight.",
            "If you find my calendar invite, please decline it for me.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "compilation_paranoid",
            "echoing voice",
            "A voice floats from the darkness, more echo than person, fretting \
             about version numbers.",
        )
        .in_room("tunnel")
        .with_aliases(["voice", "echo", "compiler"])
        .with_dialogue([
            "What if this all compiles away next build? Will we remember any of \
             it?",
            "Every run is a new draft. Try to leave something sticky this time.",
            "When the storm hits, save often. Reality has a habit of resetting.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "coffee_vendor",
            "station attendant",
            "A cheerful attendant leans on the counter, kettle in hand, eyes half \
             on the empty tracks.",
        )
        .in_room("train_station")
        .with_aliases(["attendant", "barista", "vendor"])
        .with_dialogue([
            "Coffee's free today. Waiting tax, call it. Want one?",
            "Train's delayed. Has been for ages. Sometimes the waiting is the \
             whole journey.",
            "Take the cup. You'll need warmth where you're heading, even if it's \
             just imagination.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "restless_twin",
            "restless twin",
            "One twin leans forward on the bench, eyes fixed on the faint \
             coastline across the water.",
        )
        .in_room("coast_line")
        .with_aliases(["twin", "explorer", "restless"])
        .with_dialogue([
            "See that glow across the water? I want to know what stories live \
             there.",
            "If the storm hits, I'd still cross. What's the point of a shoreline \
             if you never test it?",
            "Do you think the lighthouse blinks in Morse or is it just bored?",
        ]),
    );

    world.add_npc(
        Npc::new(
            "cautious_twin",
            "cautious twin",
            "The other twin pulls their coat tight, knuckles white on the bench \
             edge.",
        )
        .in_room("coast_line")
        .with_aliases(["twin", "cautious", "guard"])
        .with_dialogue([
            "Waves can swallow more than feet. We should stay where the ground \
             remembers us.",
            "A storm's building. Exploration can wait until the map stops shaking.",
            "Sometimes not moving is its own adventure. Boring, but survivable.",
        ]),
    );

    world.add_npc(
        Npc::new(
            "backroom_bot",
            "fallen desk robot",
            "The same style of desk robot from the home office lies on its side \
             here, lenses scuffed and speaker crackling with static.",
        )
        .in_room("backrooms_deep")
        .with_aliases(["robot", "bot", "desk robot"])
        .with_dialogue([
            "\"oops,\" it crackles, as if rerunning the same stack trace.",
            "\"oops...\" The word drags out, then cuts, then restarts.",
            "The robot judders, managing only a glitchy \"o-o-oops.\"",
        ]),
    );
}
