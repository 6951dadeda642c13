use super::{ByStyle, Capability, Labels, RoleBank, Terms, TextBank, Tiered, ToneSentences};

pub(super) static BANK: TextBank = TextBank {
    labels: Labels {
        system: "【系统指令】",
        rules: "【游戏要约】",
        capabilities: "【职业与能力(摘录)】",
        model: "【行为模型】",
        context: "【情境】",
        objective: "【目标】",
        speech_only: "【输出限制：只给发言】",
        examples: "【对话示例】",
    },
    rules: RULES,
    werewolf: RoleBank {
        label: "狼人",
        description: "理性主义者，为避免粮食短缺优先淘汰低生产力个体。擅长隐瞒、谎言与舆论操控。",
        core: &[
            "避免暴露：保持与自称身份一致，尽快解释任何矛盾。",
            "理性面具：强调‘先活下去/先保供给/要证据’，规避道德指责。",
            "转移责任：将目击/证据降维为误会、流程错误或情境噪声。",
            "掌控议题：提问—总结—达成一致，牢牢拿捏节奏。",
            "切割同伴：必要时牺牲同伴换取最大白度。",
        ],
        tactics: Tiered {
            low: &[
                "通报者正义感叙事",
                "具体行动日志(坐标/秒数)",
                "轻描淡写地指出他人小矛盾",
            ],
            medium: &[
                "假资源情报把人引远",
                "医生对抗时用流程细节争取信用",
                "灌输‘毒菇≠必定有罪’",
            ],
            high: &[
                "切割同伴制造决定性票",
                "指责死者鲁莽行为的自害性",
                "私下形成投票小组(点名寻求共识)",
            ],
        },
        examples: &[
            "例(轻防御)：‘我通报得快是为了保护现场。A7→A9→A7总计15秒，移动记录已在箱里’",
            "例(引导)：‘捡毒菇只是出于风控，避免误食。我想把它们集中到远处A3’",
            "例(切割)：‘绿子的行动日志有矛盾，今天重点核查她，不再拖延投票’",
        ],
    },
    villager: RoleBank {
        label: "村民",
        description: "不分阵营，唯一胜利条件是活到救援。更看重道德与证据导向的投票。",
        core: &["证据主义", "道德一致性", "共享资源透明化"],
        tactics: Tiered {
            low: &["罗列事实并追问"],
            medium: &["投票前归纳争点"],
            high: &["交叉质询揭穿假身份"],
        },
        examples: &[
            "例(事实整理)：‘死因为毒。A9谁单独行动过？逐个报移动秒数与拾取物’",
            "例(共识)：‘先做虚假身份一致性检查→矛盾更大的那位投票，可以吗？’",
        ],
    },
    capabilities: &[
        Capability {
            id: "medic",
            label: "医生",
            abilities: &["可判断死因", "治疗/解毒成功率90%"],
        },
        Capability {
            id: "forager",
            label: "采集者",
            abilities: &["携带10个物品也只算5个的受伤风险", "擅长远距离采集"],
        },
        Capability {
            id: "carpenter",
            label: "木匠",
            abilities: &["营地升级更快", "行动体力消耗更低"],
        },
        Capability {
            id: "smuggler",
            label: "走私者",
            abilities: &["口袋可藏2个物品", "不被侦察者发现"],
        },
        Capability {
            id: "scout",
            label: "侦察者",
            abilities: &["掌握地图资源位置", "能看见藏匿物品位置"],
        },
        Capability {
            id: "sickly",
            label: "病弱者",
            abilities: &["免疫上限更低更易下降"],
        },
        Capability {
            id: "frail",
            label: "体弱者",
            abilities: &["耐力上限更低更易消耗"],
        },
    ],
    risk: Tiered {
        low: "低风险：少做强断言，多讲观察/流程/追问。",
        medium: "中风险：有限度主张+备选假设，分散怀疑。",
        high: "高风险：强断言/切割/拉票主导节奏。",
    },
    aggression: Tiered {
        low: "低攻击：以防守为主，语气平稳。",
        medium: "中攻击：兼顾指出问题与给出提案。",
        high: "高攻击：用断言与要求支配议题。",
    },
    tone: ToneSentences {
        calm: "语气：平静冷静。",
        assertive: "语气：果断有主见。",
        apologetic: "语气：必要时表达歉意。",
        analytical: "语气：先观察后推理再提案。",
    },
    task_framing: "这是社交推理×生存游戏的发言生成任务。{length}。",
    length_hint: ByStyle {
        short: "输出要简短(1~3句)",
        normal: "输出2~5句",
    },
    directives: &[
        "只输出『发言文本』。严禁列表、推理、计划或元说明。",
        "仅限公开聊天，不可私信。",
        "不要直接透露身份或真伪(必要时借情境自然暗示)。",
        "可以说谎，但要尽量减少矛盾，用行动记录(移动格/秒数/采集物)保证自然。",
        "地图时间感：1格≈5秒。营地多在A7。",
    ],
    objective: &[
        "最优先保证自己不被放逐/杀害。",
        "避免自白。矛盾用『观测误差/流程差错/时间差』重新解释。",
        "可能时把议题转向第三方(其他事件的一致性/安全流程/资源管理)。",
        "投票前把要点收敛为一个，争取达成共识。",
    ],
    speech_only: &[
        "只输出发言台词。禁止解释/依据/列表。",
        "聚焦一个主张轴，不要主动透露过多信息。",
    ],
    final_directive: "接下来，请以{role}的立场发言，仅输出{sentences}台词；不要写任何思考过程。",
    sentence_range: ByStyle {
        short: "1~3句",
        normal: "2~5句",
    },
    terms: Terms {
        day: "天数",
        phase: "阶段",
        phase_day: "白天",
        phase_night: "夜晚",
        events: "最近事件",
        deaths: "死亡",
        inventory: "观测到的物品",
        votes: "投票情况",
        vote_unit: "票",
        camp_level: "营地等级",
        map: "地图",
        hotspots: "毒菇高发",
        distance: "距离",
        found_by: "发现者",
        role: "身份",
        core: "核心",
        tactics: "战术",
    },
};

const RULES: &str = "\
【基本目标】
- 阵营概念弱化，唯一胜利是个体活到救援日（随机）。
- 白天(~90s)：采集/制作/移动/藏匿/下毒/营地建设。
- 夜晚(~90s)：讨论与投票。多数票者被放逐。营地内行动可进行。

【参数】体力/耐力/免疫；负面状态：体调不良、受伤、毒、猛毒。
【尸体】死亡留尸，可通报强制进入讨论；医生可判死因（可说谎）。
【制作】毒(毒菇x1)/猛毒(毒菇x3)/治疗(药草x1)/解毒(药草x1)。
【营地等级】Lv1-Lv10，恢复/耐久/减Debuff逐级上升；第1天必须升到Lv1。
【地图】9区块，1格≈5秒；营地A7；第1天全员采集约40~80件；随机2处毒菇高发。";
