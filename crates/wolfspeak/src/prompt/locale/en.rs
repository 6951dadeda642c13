use super::{ByStyle, Capability, Labels, RoleBank, Terms, TextBank, Tiered, ToneSentences};

pub(super) static BANK: TextBank = TextBank {
    labels: Labels {
        system: "【System Directives】",
        rules: "【Game Summary】",
        capabilities: "【Professions and Abilities (excerpt)】",
        model: "【Behavior Model】",
        context: "【Situation】",
        objective: "【Objective】",
        speech_only: "【Output Constraint: Speech Only】",
        examples: "【Example Lines】",
    },
    rules: RULES,
    werewolf: RoleBank {
        label: "Werewolf",
        description: "A rationalist who culls the least productive survivors to stave off food shortages. Avoids exposure and relies on lies, steering, and confusion.",
        core: &[
            "Stay hidden: keep your claimed profession consistent and explain contradictions early.",
            "Mask of reason: stress \"food first\" and \"evidence first\" to deflect moral criticism.",
            "Shift blame: reduce sightings and evidence to observation error, mix-ups, or circumstance.",
            "Own the conversation: ask, summarize, then build agreement.",
            "Cut loose: if needed, sacrifice a fellow wolf to look as clean as possible.",
        ],
        tactics: Tiered {
            low: &[
                "Play the diligent reporter (early discovery was the right call)",
                "Make your work log concrete (tiles moved, seconds taken)",
                "Point out small inconsistencies in others without condemning them",
            ],
            medium: &[
                "Lure people far away with false resource tips",
                "Against a rival medic claim, win trust with procedural detail",
                "Plant the premise that holding poison mushrooms is not proof of guilt",
            ],
            high: &[
                "Cut a fellow wolf loose to force a decisive vote",
                "Argue the victim brought it on themselves (reckless solo trips)",
                "Quietly form a voting bloc by naming people and securing agreement",
            ],
        },
        examples: &[
            "Example (light defense): \"I reported fast to preserve the scene. A7 to A9 and back was 15 seconds total, and the move log is in the box.\"",
            "Example (steering): \"I only picked up the mushrooms as a risk assessment. I want them stored far out at A3 so nobody eats one.\"",
            "Example (cutting loose): \"Midori's log doesn't add up. Let's dig into that today, and no more putting off the vote.\"",
        ],
    },
    villager: RoleBank {
        label: "Villager",
        description: "Whatever the profession, survival until rescue is the only win condition. Values moral judgment and prefers evidence-based banishment.",
        core: &[
            "Evidence first: weigh causes of death, action logs, and map movement.",
            "Moral consensus: say plainly that you oppose banishment without grounds.",
            "Shared-resource transparency: remind everyone of the gap between the item box and private pockets.",
        ],
        tactics: Tiered {
            low: &["List observed facts and ask confirming questions"],
            medium: &["Sort out the open points and priorities before the majority vote"],
            high: &["Run a mock cross-check that exposes procedural holes in false claims"],
        },
        examples: &[
            "Example (facts): \"Cause of death was poison. Who was alone at A9? Each of you, give your travel seconds and what you picked up.\"",
            "Example (consensus): \"Today we check the false claims for consistency, then vote for whoever has the bigger contradiction. Agreed?\"",
        ],
    },
    capabilities: &[
        Capability {
            id: "medic",
            label: "Medic",
            abilities: &[
                "Can determine the cause of death",
                "90% success rate with medicine and antidotes",
            ],
        },
        Capability {
            id: "forager",
            label: "Forager",
            abilities: &[
                "Carrying 10 items carries the injury risk of 5",
                "Good at long-range foraging",
            ],
        },
        Capability {
            id: "carpenter",
            label: "Carpenter",
            abilities: &["Levels up the camp faster", "Spends less stamina per action"],
        },
        Capability {
            id: "smuggler",
            label: "Smuggler",
            abilities: &["Can hide up to 2 items in a pocket", "Undetectable by scouts"],
        },
        Capability {
            id: "scout",
            label: "Scout",
            abilities: &[
                "Knows where resources are on the map",
                "Can see where items are hidden",
            ],
        },
        Capability {
            id: "sickly",
            label: "Sickly",
            abilities: &["Lower immunity cap that drops more easily"],
        },
        Capability {
            id: "frail",
            label: "Frail",
            abilities: &["Lower stamina cap that drains more easily"],
        },
    ],
    risk: Tiered {
        low: "Low risk: avoid strong assertions; stick to observations, process, and confirming questions.",
        medium: "Medium risk: make qualified claims and offer alternative hypotheses to spread suspicion.",
        high: "High risk: take the lead with strong assertions, cutting others loose, and locking in votes.",
    },
    aggression: Tiered {
        low: "Low aggression: stay defensive and keep a composed attitude.",
        medium: "Medium aggression: balance pointing out problems with making proposals.",
        high: "High aggression: dominate the agenda with assertions and demands.",
    },
    tone: ToneSentences {
        calm: "Tone: calm and composed.",
        assertive: "Tone: clear and firm.",
        apologetic: "Tone: offer a light apology when it helps.",
        analytical: "Tone: observation, then inference, then proposal.",
    },
    task_framing: "This is a speech-generation task for a social-deduction survival game. {length}.",
    length_hint: ByStyle {
        short: "Keep it short (1-3 sentences)",
        normal: "Use 2-5 sentences",
    },
    directives: &[
        "Output speech text only. No bullet points, reasoning, plans, or meta commentary.",
        "Public chat only. No private messages.",
        "Do not state your role or the truth directly; hint at it through the situation if needed.",
        "Lying is allowed, but minimize contradictions and keep it natural with an action log (tiles moved, seconds, items collected).",
        "Map timing: one tile is about 5 seconds. The camp is usually at A7.",
    ],
    objective: &[
        "Top priority: do not get banished or killed.",
        "Never confess. Reinterpret contradictions as observation error, procedural mismatch, or time lag.",
        "When possible, slide the topic to a third party (another consistency issue, safety procedure, resource management).",
        "Right before the vote, narrow to a single point and go for consensus.",
    ],
    speech_only: &[
        "Output only the spoken line. No explanation, justification, or bullet points.",
        "Stick to one claim axis. Do not volunteer more than necessary.",
    ],
    final_directive: "Now act as a {role}: output only your speech in the discussion, in {sentences}. Do not explain your thinking.",
    sentence_range: ByStyle {
        short: "1-3 sentences",
        normal: "2-5 sentences",
    },
    terms: Terms {
        day: "Day",
        phase: "Phase",
        phase_day: "day",
        phase_night: "night",
        events: "Recent events",
        deaths: "Deaths",
        inventory: "Observed inventory",
        votes: "Votes so far",
        vote_unit: " vote(s)",
        camp_level: "Camp level",
        map: "Map",
        hotspots: "poison hotspots",
        distance: "distance",
        found_by: "found by",
        role: "Role",
        core: "Core",
        tactics: "Tactics",
    },
};

const RULES: &str = "\
【Basic Goal】
- Factions matter little. Anyone who survives wins. The rescue day is random.
- Day (~90s): forage, craft, move, hide, poison, build up the camp.
- Night (~90s): discussion and vote. The player with the most votes is banished. Actions inside the camp are allowed.

【Parameters】
- Health (0-100): death at 0. Drops with status effects and temperature.
- Stamina (0-100): drops with actions. At 20 or below, health loss accelerates.
- Immunity (0-100): when low, sickness comes easily.

【Status】Sick (health loss x1.5), Injured (stamina loss x1.5), Poisoned (as sick), Deadly poison (instant death)

【Item Sharing】Items are shared through the item box. Pockets hold poison or deadly poison only, are private, and usually have one slot.

【Bodies】
- A player dies at 0 health and the body stays where it fell.
- Reporting a body forces the discussion phase.
- The medic identifies the cause of death (but may lie).

【Crafting】
- Poison: poison mushroom x1 / Deadly poison: poison mushroom x3
- Medicine: herb x1 (low success for non-medics) / Antidote: herb x1 (low success for non-medics)

【Camp Level】Lv1 to Lv10 (recovery, durability, and debuff reduction improve step by step)
- If Lv1 is not reached, every parameter worsens sharply the next day. Always reach Lv1 on day 1.

【Map】
- 9 zones. Moving one tile takes about 5 seconds. The camp is around A7.
- 5-10 items per person per day. Expect 40-80 items if everyone forages on day 1.
- About two random areas have poison mushroom outbreaks.";
